use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::resource::Resource;

/// Read-only projection of a [`Resource`] sent across the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Resource> for ResourceDto {
    fn from(value: Resource) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            description: value.description.map(|d| d.into_inner()),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::resource::{Resource as DomainResource, NewResource as DomainNewResource};
use crate::domain::types::{ResourceDescription, ResourceName, TypeConstraintError};

/// Diesel model representing the `resources` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::resources)]
pub struct Resource {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Resource`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::resources)]
pub struct NewResource {
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Resource> for DomainResource {
    type Error = TypeConstraintError;

    fn try_from(resource: Resource) -> Result<Self, Self::Error> {
        Ok(Self {
            id: resource.id.try_into()?,
            name: ResourceName::new(resource.name)?,
            description: resource
                .description
                .map(ResourceDescription::new)
                .transpose()?,
            created_at: resource.created_at,
            updated_at: resource.updated_at,
        })
    }
}

impl From<DomainNewResource> for NewResource {
    fn from(resource: DomainNewResource) -> Self {
        Self {
            name: resource.name.into_inner(),
            description: resource.description.map(ResourceDescription::into_inner),
            created_at: resource.created_at,
            updated_at: resource.updated_at,
        }
    }
}

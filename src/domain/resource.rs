use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ResourceDescription, ResourceId, ResourceName};

/// Canonical resource record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub id: ResourceId,
    pub name: ResourceName,
    pub description: Option<ResourceDescription>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Resource`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewResource {
    pub name: ResourceName,
    pub description: Option<ResourceDescription>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

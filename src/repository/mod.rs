use crate::db::{DbConnection, DbPool};
use crate::domain::resource::{NewResource, Resource};
use crate::domain::types::ResourceId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod resource;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for resource entities.
pub trait ResourceReader {
    /// Retrieve a resource by its identifier.
    fn get_resource_by_id(&self, id: ResourceId) -> RepositoryResult<Option<Resource>>;
    /// List all resources in insertion order.
    fn list_resources(&self) -> RepositoryResult<Vec<Resource>>;
}

/// Write operations for resource entities.
pub trait ResourceWriter {
    /// Persist a new resource, returning the stored row with its assigned id.
    fn create_resource(&self, resource: &NewResource) -> RepositoryResult<Resource>;
}

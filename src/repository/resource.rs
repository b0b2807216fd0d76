use diesel::prelude::*;

use crate::domain::resource::{NewResource, Resource};
use crate::domain::types::ResourceId;
use crate::models::resource::{NewResource as DbNewResource, Resource as DbResource};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ResourceReader, ResourceWriter};

impl ResourceReader for DieselRepository {
    fn get_resource_by_id(&self, id: ResourceId) -> RepositoryResult<Option<Resource>> {
        use crate::schema::resources;

        let mut conn = self.conn()?;

        let resource = resources::table
            .filter(resources::id.eq(id.get()))
            .first::<DbResource>(&mut conn)
            .optional()?;

        let resource = resource.map(TryInto::try_into).transpose()?;
        Ok(resource)
    }

    fn list_resources(&self) -> RepositoryResult<Vec<Resource>> {
        use crate::schema::resources;

        let mut conn = self.conn()?;

        let items = resources::table
            .order(resources::id.asc())
            .load::<DbResource>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Resource>, _>>()?;

        Ok(items)
    }
}

impl ResourceWriter for DieselRepository {
    fn create_resource(&self, resource: &NewResource) -> RepositoryResult<Resource> {
        use crate::schema::resources;

        let mut conn = self.conn()?;
        let db_resource: DbNewResource = resource.clone().into();

        let created = conn.transaction(|conn| {
            diesel::insert_into(resources::table)
                .values(db_resource)
                .get_result::<DbResource>(conn)
        })?;

        Ok(created.try_into()?)
    }
}

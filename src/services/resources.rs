use crate::domain::types::ResourceId;
use crate::dto::resources::ResourceDto;
use crate::forms::resources::CreateResourceFormPayload;
use crate::repository::{ResourceReader, ResourceWriter};

use super::{ServiceError, ServiceResult};

/// Core business logic for the create endpoint.
///
/// The payload has already passed validation; this persists a new resource
/// with matching creation/update timestamps and returns its projection. All
/// repository interactions are handled here so that the HTTP route can remain
/// a thin wrapper.
pub fn create_resource<R>(payload: CreateResourceFormPayload, repo: &R) -> ServiceResult<ResourceDto>
where
    R: ResourceWriter,
{
    let new_resource = payload.into_new_resource();

    match repo.create_resource(&new_resource) {
        Ok(resource) => Ok(ResourceDto::from(resource)),
        Err(e) => {
            log::error!("Failed to create resource: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Fetch a single resource by id, reporting absence as `NotFound`.
pub fn get_resource<R>(resource_id: ResourceId, repo: &R) -> ServiceResult<ResourceDto>
where
    R: ResourceReader,
{
    match repo.get_resource_by_id(resource_id) {
        Ok(Some(resource)) => Ok(ResourceDto::from(resource)),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get resource: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// List every stored resource in insertion order.
pub fn list_resources<R>(repo: &R) -> ServiceResult<Vec<ResourceDto>>
where
    R: ResourceReader,
{
    match repo.list_resources() {
        Ok(resources) => Ok(resources.into_iter().map(ResourceDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list resources: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::domain::resource::Resource;
    use crate::domain::types::{ResourceDescription, ResourceId, ResourceName};
    use crate::forms::resources::CreateResourceForm;
    use crate::repository::test::TestRepository;

    fn sample_payload(name: &str) -> CreateResourceFormPayload {
        let form = CreateResourceForm {
            name: Some(name.to_string()),
            description: Some("A sample resource".to_string()),
        };
        form.try_into().unwrap()
    }

    fn sample_resource(id: i32) -> Resource {
        Resource {
            id: ResourceId::new(id).unwrap(),
            name: ResourceName::new("Stored").unwrap(),
            description: Some(ResourceDescription::new("Already persisted").unwrap()),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn create_assigns_id_and_matching_timestamps() {
        let repo = TestRepository::new();

        let dto = create_resource(sample_payload("Build server"), &repo).unwrap();

        assert_eq!(dto.id, 1);
        assert_eq!(dto.name, "Build server");
        assert_eq!(dto.created_at, dto.updated_at);
    }

    #[test]
    fn create_then_get_returns_identical_projection() {
        let repo = TestRepository::new();

        let created = create_resource(sample_payload("Build server"), &repo).unwrap();
        let fetched = get_resource(ResourceId::new(created.id).unwrap(), &repo).unwrap();

        assert_eq!(created, fetched);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let repo = TestRepository::new();

        let err = get_resource(ResourceId::new(42).unwrap(), &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn list_is_empty_without_resources() {
        let repo = TestRepository::new();

        let resources = list_resources(&repo).unwrap();
        assert!(resources.is_empty());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let repo = TestRepository::with_resources(vec![sample_resource(1), sample_resource(2)]);

        let first = create_resource(sample_payload("Third"), &repo).unwrap();
        assert_eq!(first.id, 3);

        let resources = list_resources(&repo).unwrap();
        assert_eq!(resources.len(), 3);
        assert_eq!(
            resources.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}

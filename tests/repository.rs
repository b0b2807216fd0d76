use chrono::Utc;
use resource_api::domain::resource::NewResource;
use resource_api::domain::types::{ResourceDescription, ResourceId, ResourceName};
use resource_api::repository::{DieselRepository, ResourceReader, ResourceWriter};

mod common;

fn new_resource(name: &str, description: Option<&str>) -> NewResource {
    let now = Utc::now().naive_utc();
    NewResource {
        name: ResourceName::new(name).expect("valid resource name"),
        description: description
            .map(|d| ResourceDescription::new(d).expect("valid resource description")),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn create_assigns_an_id_and_returns_the_stored_row() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_resource(&new_resource("Build server", Some("Primary CI host")))
        .expect("should create resource");

    assert!(created.id.get() > 0);
    assert_eq!(created.name.as_str(), "Build server");
    assert_eq!(
        created.description.as_ref().map(|d| d.as_str()),
        Some("Primary CI host")
    );
    assert_eq!(created.created_at, created.updated_at);
}

#[test]
fn get_by_id_round_trips_the_created_resource() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_resource(&new_resource("Build server", None))
        .expect("should create resource");

    let fetched = repo
        .get_resource_by_id(created.id)
        .expect("should query resource")
        .expect("created resource should exist");

    assert_eq!(fetched, created);
    assert!(fetched.description.is_none());
}

#[test]
fn get_by_id_returns_none_for_unknown_ids() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let missing = repo
        .get_resource_by_id(ResourceId::new(999).expect("valid id"))
        .expect("should query resource");

    assert!(missing.is_none());
}

#[test]
fn list_returns_resources_in_insertion_order() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    assert!(
        repo.list_resources()
            .expect("should list resources")
            .is_empty()
    );

    let first = repo
        .create_resource(&new_resource("First", None))
        .expect("should create resource");
    let second = repo
        .create_resource(&new_resource("Second", None))
        .expect("should create resource");
    let third = repo
        .create_resource(&new_resource("Third", None))
        .expect("should create resource");

    let listed = repo.list_resources().expect("should list resources");
    assert_eq!(listed, vec![first, second, third]);
}

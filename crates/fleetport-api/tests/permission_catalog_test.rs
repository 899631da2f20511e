//! Service-level tests for permission catalog management.

mod common;

use common::{perm, TestFixture};
use fleetport_authz::AuthzError;
use fleetport_core::Role;
use fleetport_store::UserStore;

#[tokio::test]
async fn catalog_create_list_delete_cycle() {
    let fixture = TestFixture::new();
    let catalog = &fixture.state.catalog;

    catalog
        .create(perm("View Vehicles"), "See the fleet".to_string())
        .await
        .unwrap();
    catalog
        .create(perm("Add Vehicles"), "Register new vehicles".to_string())
        .await
        .unwrap();

    let listed = catalog.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, perm("Add Vehicles"));
    assert_eq!(listed[1].name, perm("View Vehicles"));

    catalog.delete(&perm("Add Vehicles")).await.unwrap();
    let listed = catalog.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, perm("View Vehicles"));
}

#[tokio::test]
async fn duplicate_name_is_rejected() {
    let fixture = TestFixture::new();
    let catalog = &fixture.state.catalog;

    catalog
        .create(perm("View Reports"), "First".to_string())
        .await
        .unwrap();
    let err = catalog
        .create(perm("View Reports"), "Second".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AuthzError::DuplicatePermission(_)));
}

#[tokio::test]
async fn delete_unknown_name_is_not_found() {
    let fixture = TestFixture::new();
    let err = fixture
        .state
        .catalog
        .delete(&perm("Ghost"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthzError::PermissionNotFound(_)));
}

#[tokio::test]
async fn catalog_delete_does_not_cascade_to_grants() {
    let fixture = TestFixture::new();
    let manager = fixture
        .add_user("Lena", "lena@fleet.example", Role::BranchManager)
        .await;

    fixture
        .state
        .catalog
        .create(perm("View Vehicles"), "See the fleet".to_string())
        .await
        .unwrap();
    fixture
        .state
        .grants
        .assign(manager, perm("View Vehicles"))
        .await
        .unwrap();

    fixture
        .state
        .catalog
        .delete(&perm("View Vehicles"))
        .await
        .unwrap();

    // The dangling grant survives and still authorizes.
    let user = fixture.users.get(manager).await.unwrap().unwrap();
    assert_eq!(user.custom_permissions, vec![perm("View Vehicles")]);
    assert!(fixture
        .state
        .resolver
        .is_authorized(manager, "View Vehicles")
        .await
        .unwrap());
}

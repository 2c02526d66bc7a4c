mod common;

use assert_matches::assert_matches;

use common::TestApp;
use plymill_api::errors::ServiceError;
use plymill_api::services::suppliers::{NewSupplier, SupplierUpdate};

fn new_supplier(name: &str) -> NewSupplier {
    NewSupplier {
        name: name.to_string(),
        contact_name: Some("Budi".to_string()),
        phone: None,
        address: None,
    }
}

#[tokio::test]
async fn create_and_fetch_a_supplier() {
    let app = TestApp::new().await;

    let created = app
        .state
        .services
        .suppliers
        .create(new_supplier("Kayu Makmur"))
        .await
        .expect("create");
    assert!(created.is_active);

    let fetched = app
        .state
        .services
        .suppliers
        .get(created.id)
        .await
        .expect("get");
    assert_eq!(fetched.name, "Kayu Makmur");

    let err = app.state.services.suppliers.get(999).await.unwrap_err();
    assert_matches!(err, ServiceError::NotFound(_));
}

#[tokio::test]
async fn blank_names_are_rejected() {
    let app = TestApp::new().await;

    let err = app
        .state
        .services
        .suppliers
        .create(new_supplier("   "))
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::ValidationError(_));
}

#[tokio::test]
async fn partial_update_leaves_other_fields_alone() {
    let app = TestApp::new().await;
    let created = app
        .state
        .services
        .suppliers
        .create(new_supplier("Kayu Makmur"))
        .await
        .expect("create");

    let updated = app
        .state
        .services
        .suppliers
        .update(
            created.id,
            SupplierUpdate {
                phone: Some("0812-000-111".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.name, "Kayu Makmur");
    assert_eq!(updated.contact_name.as_deref(), Some("Budi"));
    assert_eq!(updated.phone.as_deref(), Some("0812-000-111"));
}

#[tokio::test]
async fn deactivation_hides_a_supplier_from_the_active_list() {
    let app = TestApp::new().await;

    let keep = app
        .state
        .services
        .suppliers
        .create(new_supplier("Kayu Makmur"))
        .await
        .expect("create keep");
    let drop = app
        .state
        .services
        .suppliers
        .create(new_supplier("Veneer Jaya"))
        .await
        .expect("create drop");

    app.state
        .services
        .suppliers
        .deactivate(drop.id)
        .await
        .expect("deactivate");

    let active = app
        .state
        .services
        .suppliers
        .list(true)
        .await
        .expect("active list");
    assert_eq!(active.iter().map(|s| s.id).collect::<Vec<_>>(), vec![keep.id]);

    let all = app.state.services.suppliers.list(false).await.expect("full list");
    assert_eq!(all.len(), 2);
}

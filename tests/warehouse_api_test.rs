mod common;

use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::{json, Value};

use common::{response_json, warehouse_payload, TestApp};

#[tokio::test]
async fn warehouse_lifecycle() {
    let app = TestApp::new().await;

    // Create normalizes names and phone
    let response = app
        .request(
            Method::POST,
            "/api/warehouses",
            Some(warehouse_payload("manhattan")),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await;
    let id = created["id"].as_i64().expect("generated id");
    assert!(id > 0);
    assert_eq!(created["warehouse_name"], "Manhattan");
    assert_eq!(created["city"], "New york");
    assert_eq!(created["contact_name"], "Graeme Lyon");
    assert_eq!(created["contact_position"], "Warehouse Manager");
    assert_eq!(created["contact_phone"], "+1 (212) 555-0100");
    assert_eq!(created["contact_email"], "glyon@instock.com");

    // Get returns the same row
    let response = app
        .request(Method::GET, &format!("/api/warehouses/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, created);

    // Full update
    let mut update = warehouse_payload("washington");
    update["contact_phone"] = json!("+1 (646) 123-1234");
    update["contact_email"] = json!("new.manager@instock.com");
    let response = app
        .request(Method::PUT, &format!("/api/warehouses/{id}"), Some(update))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["warehouse_name"], "Washington");
    assert_eq!(updated["contact_phone"], "+1 (646) 123-1234");
    assert_eq!(updated["contact_email"], "new.manager@instock.com");

    // Listed
    let response = app.request(Method::GET, "/api/warehouses", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = response_json(response).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    // Delete, then gone
    let response = app
        .request(Method::DELETE, &format!("/api/warehouses/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .request(Method::GET, &format!("/api/warehouses/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["message"], format!("Warehouse with ID {id} not found"));
}

#[tokio::test]
async fn list_is_ordered_by_id() {
    let app = TestApp::new().await;
    let first = app.seed_warehouse("Manhattan").await;
    let second = app.seed_warehouse("Boston").await;

    let list = response_json(app.request(Method::GET, "/api/warehouses", None).await).await;
    let ids: Vec<i64> = list
        .as_array()
        .expect("array")
        .iter()
        .map(|w| w["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[rstest]
#[case("warehouse_name")]
#[case("address")]
#[case("city")]
#[case("country")]
#[case("contact_name")]
#[case("contact_position")]
#[case("contact_phone")]
#[case("contact_email")]
#[tokio::test]
async fn create_missing_field_is_rejected_without_insert(#[case] field: &str) {
    let app = TestApp::new().await;
    let mut payload = warehouse_payload("Manhattan");
    payload.as_object_mut().unwrap().remove(field);

    let response = app
        .request(Method::POST, "/api/warehouses", Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        format!("Missing one or more input fields: {field}")
    );

    let list = response_json(app.request(Method::GET, "/api/warehouses", None).await).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn blank_fields_count_as_missing() {
    let app = TestApp::new().await;
    let mut payload = warehouse_payload("Manhattan");
    payload["city"] = json!("   ");
    payload["country"] = json!("");

    let response = app
        .request(Method::POST, "/api/warehouses", Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(
        body["message"],
        "Missing one or more input fields: city, country"
    );
}

#[rstest]
#[case("contact_email", json!("not-an-email"), "Invalid email address")]
#[case("contact_email", json!("user@domain"), "Invalid email address")]
#[case("contact_phone", json!("555-0100"), "Invalid phone number")]
#[case("contact_phone", json!("1 (212) 555-0100 ext 9"), "Invalid phone number")]
#[tokio::test]
async fn create_rejects_malformed_contact(
    #[case] field: &str,
    #[case] value: Value,
    #[case] message_prefix: &str,
) {
    let app = TestApp::new().await;
    let mut payload = warehouse_payload("Manhattan");
    payload[field] = value;

    let response = app
        .request(Method::POST, "/api/warehouses", Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["message"]
        .as_str()
        .is_some_and(|m| m.starts_with(message_prefix)));
}

#[tokio::test]
async fn update_requires_every_field() {
    let app = TestApp::new().await;
    let id = app.seed_warehouse("Manhattan").await;

    let response = app
        .request(
            Method::PUT,
            &format!("/api/warehouses/{id}"),
            Some(json!({ "warehouse_name": "Renamed" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let fetched = response_json(
        app.request(Method::GET, &format!("/api/warehouses/{id}"), None)
            .await,
    )
    .await;
    assert_eq!(fetched["warehouse_name"], "Manhattan");
}

#[rstest]
#[case(Method::GET)]
#[case(Method::DELETE)]
#[tokio::test]
async fn unknown_warehouse_is_not_found(#[case] method: Method) {
    let app = TestApp::new().await;
    let response = app.request(method, "/api/warehouses/404", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_unknown_warehouse_is_not_found() {
    let app = TestApp::new().await;
    let response = app
        .request(
            Method::PUT,
            "/api/warehouses/404",
            Some(warehouse_payload("Ghost")),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let app = TestApp::new().await;
    let response = app.request(Method::GET, "/api/warehouses/abc", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_cascades_to_inventory() {
    let app = TestApp::new().await;
    let doomed = app.seed_warehouse("Manhattan").await;
    let kept = app.seed_warehouse("Boston").await;
    let doomed_items = [
        app.seed_inventory(doomed, "Television").await,
        app.seed_inventory(doomed, "Gym Bag").await,
    ];
    let kept_item = app.seed_inventory(kept, "Shampoo").await;

    let response = app
        .request(Method::DELETE, &format!("/api/warehouses/{doomed}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .request(Method::GET, &format!("/api/warehouses/{doomed}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for item in doomed_items {
        let response = app
            .request(Method::GET, &format!("/api/inventories/{item}"), None)
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let remaining = response_json(app.request(Method::GET, "/api/inventories", None).await).await;
    let remaining = remaining.as_array().expect("array");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"].as_i64(), Some(kept_item));
}

#[tokio::test]
async fn warehouse_inventories_listing() {
    let app = TestApp::new().await;
    let id = app.seed_warehouse("Manhattan").await;

    // Known warehouse without stock
    let response = app
        .request(Method::GET, &format!("/api/warehouses/{id}/inventories"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!([]));

    let item = app.seed_inventory(id, "Television").await;
    let response = app
        .request(Method::GET, &format!("/api/warehouses/{id}/inventories"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        json!([{
            "id": item,
            "item_name": "Television",
            "category": "Electronics",
            "status": "In Stock",
            "quantity": 500
        }])
    );

    // Unknown warehouse
    let response = app
        .request(Method::GET, "/api/warehouses/999/inventories", None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

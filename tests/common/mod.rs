#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use warehouse_api::{config::AppConfig, db, AppState};

/// Helper harness for spinning up the application backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        // One connection, otherwise each pooled connection gets its own empty database.
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);
        let router = warehouse_api::app(state.clone());

        Self { router, state }
    }

    /// Send a request against the router with an optional JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        self.request_with_headers(method, uri, body, &[]).await
    }

    pub async fn request_with_headers(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        self.send(builder.body(body).expect("failed to build request"))
            .await
    }

    /// Send a prebuilt request, for bodies that are not valid JSON.
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Creates a warehouse through the API and returns its id.
    pub async fn seed_warehouse(&self, name: &str) -> i64 {
        let response = self
            .request(Method::POST, "/api/warehouses", Some(warehouse_payload(name)))
            .await;
        assert_eq!(response.status(), 201, "seeding warehouse {name}");
        response_json(response).await["id"]
            .as_i64()
            .expect("warehouse id")
    }

    /// Creates an inventory item through the API and returns its id.
    pub async fn seed_inventory(&self, warehouse_id: i64, item_name: &str) -> i64 {
        let response = self
            .request(
                Method::POST,
                "/api/inventories",
                Some(inventory_payload(warehouse_id, item_name)),
            )
            .await;
        assert_eq!(response.status(), 201, "seeding inventory {item_name}");
        response_json(response).await["id"]
            .as_i64()
            .expect("inventory id")
    }
}

pub fn warehouse_payload(name: &str) -> Value {
    json!({
        "warehouse_name": name,
        "address": "300 Main Street",
        "city": "new york",
        "country": "USA",
        "contact_name": "graeme lyon",
        "contact_position": "warehouse manager",
        "contact_phone": "2125550100",
        "contact_email": "glyon@instock.com"
    })
}

pub fn inventory_payload(warehouse_id: i64, item_name: &str) -> Value {
    json!({
        "warehouse_id": warehouse_id,
        "item_name": item_name,
        "description": "This 50\", 4K LED TV provides a crystal-clear picture.",
        "category": "Electronics",
        "status": "In Stock",
        "quantity": 500
    })
}

pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}

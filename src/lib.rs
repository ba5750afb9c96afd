//! Warehouse API Library
//!
//! CRUD HTTP service for warehouses and the inventory items they stock.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod middleware_helpers;
pub mod migrator;
pub mod openapi;
pub mod services;
pub mod tracing;
pub mod validation;

use axum::{http::Uri, routing::get, Router};
use std::{sync::Arc, time::Duration};
use tower_http::timeout::TimeoutLayer;

use crate::db::DbPool;
use crate::errors::ServiceError;
use crate::services::{InventoryService, WarehouseService};

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
    pub config: config::AppConfig,
    pub warehouses: WarehouseService,
    pub inventories: InventoryService,
}

impl AppState {
    pub fn new(db: Arc<DbPool>, config: config::AppConfig) -> Self {
        Self {
            warehouses: WarehouseService::new(db.clone()),
            inventories: InventoryService::new(db.clone()),
            db,
            config,
        }
    }
}

/// Resource routes, mounted under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/warehouses", handlers::warehouses::warehouse_routes())
        .nest("/inventories", handlers::inventories::inventory_routes())
}

async fn route_not_found(uri: Uri) -> ServiceError {
    ServiceError::NotFound(format!("No route for {}", uri.path()))
}

/// Full application router: health probes, OpenAPI document and the `/api` resources.
///
/// Every request gets a request id, an HTTP span and a timeout. CORS is left to
/// the binary since it depends on the deployment.
pub fn app(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .nest("/health", health::health_routes())
        .nest("/api", api_routes())
        .fallback(route_not_found)
        .layer(TimeoutLayer::new(timeout))
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}

//! Liveness (`/health`) and readiness (`/health/ready`) probes.

use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Basic health status
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Up,
    Down,
}

/// Readiness of one dependency
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthDetail {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Readiness {
    pub ready: bool,
    pub database: HealthDetail,
}

/// Health routes, mounted at `/health`
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health_check))
        .route("/ready", get(readiness_check))
}

/// Liveness check. Never touches the database.
pub async fn health_check() -> impl IntoResponse {
    debug!("Health check endpoint called");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": HealthStatus::Up,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now(),
        })),
    )
}

/// Readiness check: the service is ready once the database answers a ping
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    debug!("Readiness check endpoint called");

    let database = match crate::db::check_connection(&state.db).await {
        Ok(()) => HealthDetail {
            status: HealthStatus::Up,
            message: None,
            timestamp: Utc::now(),
        },
        Err(e) => {
            warn!("Database is not ready: {}", e);
            HealthDetail {
                status: HealthStatus::Down,
                message: Some(e.to_string()),
                timestamp: Utc::now(),
            }
        }
    };

    let ready = database.status == HealthStatus::Up;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(Readiness { ready, database }))
}

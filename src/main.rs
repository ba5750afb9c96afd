use std::{net::SocketAddr, sync::Arc};

use http::HeaderValue;
use tokio::signal;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tracing::{error, info, warn};

use warehouse_api as api;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = api::config::load_config()?;
    api::config::init_tracing(cfg.log_level(), cfg.log_json);

    // Init DB
    let db_pool = api::db::establish_connection_from_app_config(&cfg).await?;
    if cfg.auto_migrate {
        api::db::run_migrations(&db_pool).await.map_err(|e| {
            error!("Failed running migrations: {}", e);
            e
        })?;
    }
    let db_arc = Arc::new(db_pool);

    let cors_layer = build_cors_layer(&cfg)?;

    let app_state = api::AppState::new(db_arc.clone(), cfg.clone());
    let app = api::app(app_state).layer(cors_layer);

    // Bind and serve
    let host: std::net::IpAddr = cfg.host.parse().unwrap_or_else(|_| {
        warn!("Invalid host '{}', binding to 0.0.0.0", cfg.host);
        std::net::IpAddr::from([0, 0, 0, 0])
    });
    let addr = SocketAddr::new(host, cfg.port);
    info!("warehouse-api listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Last handle once the server has drained.
    if let Ok(pool) = Arc::try_unwrap(db_arc) {
        api::db::close_pool(pool).await?;
    }

    Ok(())
}

fn build_cors_layer(
    cfg: &api::config::AppConfig,
) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let configured_origins: Vec<HeaderValue> = cfg
        .cors_origins()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if !configured_origins.is_empty() {
        let layer = CorsLayer::new().allow_origin(configured_origins);
        // Credentials cannot be combined with wildcard methods and headers.
        let layer = if cfg.cors_allow_credentials {
            layer
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        } else {
            layer.allow_methods(Any).allow_headers(Any)
        };
        Ok(layer)
    } else if cfg.should_allow_permissive_cors() {
        info!(
            "Using permissive CORS because explicit origins were not configured ({})",
            if cfg.is_development() {
                "development environment"
            } else {
                "explicit override enabled"
            }
        );
        Ok(CorsLayer::permissive())
    } else {
        error!("Missing CORS configuration detected; set APP__CORS_ALLOWED_ORIGINS or APP__CORS_ALLOW_ANY_ORIGIN=true");
        Err("Missing CORS configuration: set APP__CORS_ALLOWED_ORIGINS or APP__CORS_ALLOW_ANY_ORIGIN=true".into())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

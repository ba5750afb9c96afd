use crate::config::{AppConfig, AppConfigError};
use crate::errors::ServiceError;
use metrics::{counter, gauge};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, error, info};

/// Type alias for a database connection pool
pub type DbPool = DatabaseConnection;

/// Configuration for database connection
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Minimum number of connections
    pub min_connections: u32,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Idle timeout duration
    pub idle_timeout: Duration,
    /// Acquire connection timeout
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            acquire_timeout: Duration::from_secs(8),
        }
    }
}

impl TryFrom<&AppConfig> for DbConfig {
    type Error = AppConfigError;

    fn try_from(cfg: &AppConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            url: cfg.database_url()?,
            max_connections: cfg.db_max_connections,
            min_connections: cfg.db_min_connections,
            connect_timeout: Duration::from_secs(cfg.db_connect_timeout_secs),
            idle_timeout: Duration::from_secs(cfg.db_idle_timeout_secs),
            acquire_timeout: Duration::from_secs(cfg.db_acquire_timeout_secs),
        })
    }
}

/// Establishes a connection pool to the database with custom configuration
///
/// # Errors
/// Returns a `ServiceError::DatabaseError` if the connection cannot be established
pub async fn establish_connection_with_config(config: &DbConfig) -> Result<DbPool, ServiceError> {
    // The URL may carry credentials, so only the tuning is logged.
    debug!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        connect_timeout = ?config.connect_timeout,
        "Configuring database connection"
    );

    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .sqlx_logging(false);

    gauge!("warehouse_db.max_connections", config.max_connections as f64);

    info!(
        "Connecting to database with max_connections={}",
        config.max_connections
    );

    let db_pool = Database::connect(opt).await.map_err(|e| {
        error!("Database connection establishment failed: {}", e);
        counter!("warehouse_db.connection_failures", 1);
        ServiceError::DatabaseError(e)
    })?;

    info!("Database connection pool established successfully");

    Ok(db_pool)
}

/// Establish DB pool using AppConfig tuning
pub async fn establish_connection_from_app_config(
    cfg: &AppConfig,
) -> Result<DbPool, ServiceError> {
    let db_cfg = DbConfig::try_from(cfg)?;
    establish_connection_with_config(&db_cfg).await
}

/// Runs the embedded migrations
pub async fn run_migrations(pool: &DbPool) -> Result<(), ServiceError> {
    info!("Running database migrations");
    let start = std::time::Instant::now();

    let result = crate::migrator::Migrator::up(pool, None)
        .await
        .map_err(ServiceError::DatabaseError);

    let elapsed = start.elapsed();
    match &result {
        Ok(_) => info!(
            "Database migrations completed successfully in {:?}",
            elapsed
        ),
        Err(e) => error!("Database migrations failed after {:?}: {}", elapsed, e),
    }

    result
}

/// Checks if the database connection is active
pub async fn check_connection(pool: &DbPool) -> Result<(), ServiceError> {
    debug!("Checking database connection");
    let start = std::time::Instant::now();

    let result = pool.ping().await.map_err(ServiceError::DatabaseError);

    let elapsed = start.elapsed();
    match &result {
        Ok(_) => {
            debug!("Database connection check successful in {:?}", elapsed);
            gauge!("warehouse_db.connection_latency", elapsed.as_millis() as f64);
        }
        Err(e) => {
            error!(
                "Database connection check failed after {:?}: {}",
                elapsed, e
            );
            counter!("warehouse_db.connection_failures", 1);
        }
    }

    result
}

/// Closes the database connection pool
pub async fn close_pool(pool: DbPool) -> Result<(), ServiceError> {
    info!("Closing database connection pool");

    pool.close().await.map_err(ServiceError::DatabaseError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Statement};

    async fn memory_pool() -> DbPool {
        let config = DbConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            ..Default::default()
        };
        establish_connection_with_config(&config).await.unwrap()
    }

    #[tokio::test]
    async fn connects_and_pings() {
        let pool = memory_pool().await;
        assert!(check_connection(&pool).await.is_ok());
    }

    #[tokio::test]
    async fn migrations_create_both_tables() {
        let pool = memory_pool().await;
        run_migrations(&pool).await.unwrap();

        let backend = pool.get_database_backend();
        let rows = pool
            .query_all(Statement::from_string(
                backend,
                "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
            ))
            .await
            .unwrap();
        let names: Vec<String> = rows
            .iter()
            .map(|row| row.try_get::<String>("", "name").unwrap())
            .collect();

        assert!(names.contains(&"warehouses".to_string()));
        assert!(names.contains(&"inventories".to_string()));
    }

    #[test]
    fn db_config_follows_app_config() {
        let mut app = AppConfig::new(
            "sqlite::memory:".into(),
            "127.0.0.1".into(),
            8080,
            "development".into(),
        );
        app.db_max_connections = 4;
        app.db_acquire_timeout_secs = 3;

        let cfg = DbConfig::try_from(&app).unwrap();
        assert_eq!(cfg.url, "sqlite::memory:");
        assert_eq!(cfg.max_connections, 4);
        assert_eq!(cfg.acquire_timeout, Duration::from_secs(3));
    }

    #[tokio::test]
    async fn unusable_database_host_fails_before_connecting() {
        let mut app = AppConfig::new(
            String::new(),
            "127.0.0.1".into(),
            8080,
            "development".into(),
        );
        app.database_url = None;
        app.db_host = Some("bad host".into());
        app.db_name = Some("instock".into());

        let result = establish_connection_from_app_config(&app).await;
        assert!(matches!(
            result,
            Err(ServiceError::Configuration(AppConfigError::DatabaseUrl(_)))
        ));
    }

    #[tokio::test]
    async fn close_pool_succeeds() {
        let pool = memory_pool().await;
        assert!(close_pool(pool).await.is_ok());
    }
}

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::time::Duration;
use tracing::info;

pub use configs::DatabaseConfig;

/// Open a pooled connection using the tuning knobs from `DatabaseConfig`.
/// The returned handle is cheap to clone and safe to share across tasks.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    info!(max_connections = cfg.max_connections, min_connections = cfg.min_connections, "database pool ready");
    Ok(db)
}

/// Round-trip a trivial statement; used as a readiness check at startup.
pub async fn test_connection(db: &DatabaseConnection) -> anyhow::Result<()> {
    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_string());
    db.execute(stmt).await?;
    Ok(())
}

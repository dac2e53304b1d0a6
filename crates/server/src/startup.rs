use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::Context;
use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{routes, state::ServerState};
use service::swift_codes::repo::seaorm::SeaOrmSwiftCodeRepository;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load configuration from `CONFIG_PATH` (default `config.toml`); when the
/// file does not exist fall back to environment variables.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        return AppConfig::load_and_validate().with_context(|| format!("invalid config file {path}"));
    }
    let cfg = AppConfig::from_env();
    cfg.database.validate()?;
    Ok(cfg)
}

/// Connect to the store, apply the schema and serve until the listener fails.
pub async fn serve(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::test_connection(&db).await.context("database is not reachable")?;
    migration::Migrator::up(&db, None).await?;
    info!("connected to the database");

    let state = ServerState::new(Arc::new(SeaOrmSwiftCodeRepository::new(db)));
    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    info!(%addr, "starting swift code server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

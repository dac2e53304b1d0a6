/// Database connection and configuration tests
pub mod db_tests;


/// Database tests need a reachable PostgreSQL; they are skipped unless
/// `DATABASE_URL` is set and `SKIP_DB_TESTS` is not.
use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, DatabaseConfig};

/// Pooled connection built from `DATABASE_URL` or the `DB_*` variables.
pub(crate) async fn connect_test_db() -> anyhow::Result<DatabaseConnection> {
    connect_with_config(&DatabaseConfig::from_env()).await
}

pub(crate) fn db_tests_enabled() -> bool {
    let _ = dotenvy::dotenv();
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        println!("Skipping database tests (SKIP_DB_TESTS is set)");
        return false;
    }
    if std::env::var("DATABASE_URL").is_err() {
        println!("Skipping database tests (DATABASE_URL is not set)");
        return false;
    }
    true
}

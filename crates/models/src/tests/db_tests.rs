use crate::db::{connect_with_config, test_connection, DatabaseConfig};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::time::{Duration, Instant};
use anyhow::Result;

use super::{connect_test_db, db_tests_enabled};

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    if !db_tests_enabled() {
        return Ok(());
    }

    let start = Instant::now();
    let db = connect_test_db().await?;
    let connection_time = start.elapsed();

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1 as test".to_string());
    let result = db.query_one(stmt).await?;

    let row = result.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);

    assert!(connection_time < Duration::from_secs(5),
           "Connection took too long: {:?}", connection_time);

    Ok(())
}

/// Test connection with custom pool configuration
#[tokio::test]
async fn test_custom_config_connection() -> Result<()> {
    if !db_tests_enabled() {
        return Ok(());
    }

    let config = DatabaseConfig {
        url: DatabaseConfig::from_env().url,
        max_connections: 5,
        min_connections: 1,
        connect_timeout_secs: 10,
        ..Default::default()
    };

    let db = connect_with_config(&config).await?;
    test_connection(&db).await?;

    Ok(())
}

/// The pool must serve several in-flight queries at once.
#[tokio::test]
async fn test_connection_pool_concurrent_use() -> Result<()> {
    if !db_tests_enabled() {
        return Ok(());
    }

    let config = DatabaseConfig {
        url: DatabaseConfig::from_env().url,
        max_connections: 3,
        min_connections: 1,
        ..Default::default()
    };
    let db = connect_with_config(&config).await?;

    let mut handles = vec![];
    for i in 0..5 {
        let db = db.clone();
        handles.push(tokio::spawn(async move {
            let stmt = Statement::from_string(DatabaseBackend::Postgres, format!("SELECT {} as value", i));
            let row = db.query_one(stmt).await?.expect("one row");
            row.try_get::<i32>("", "value")
        }));
    }

    let mut values = vec![];
    for h in handles {
        values.push(h.await??);
    }
    values.sort();
    assert_eq!(values, vec![0, 1, 2, 3, 4]);
    Ok(())
}

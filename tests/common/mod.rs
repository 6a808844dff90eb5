// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use cambio::application::ExchangeService;
use cambio::storage::SqliteRateStore;
use tempfile::TempDir;

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(ExchangeService<SqliteRateStore>, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite:{}?mode=rwc", db_path.to_str().unwrap());
    let store = SqliteRateStore::init(&db_url).await?;
    Ok((ExchangeService::new(store), temp_dir))
}

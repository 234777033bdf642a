#![allow(dead_code)]

use etl_db::UserRecordRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

/// Creates an in-memory SQLite pool with `user_data` created
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    UserRecordRepository::create_table(&pool)
        .await
        .expect("Failed to create user_data");

    pool
}

/// Temp directory holding a not-yet-created store file
pub fn create_test_store_dir() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("api_data.db");
    (dir, path)
}

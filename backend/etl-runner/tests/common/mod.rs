#![allow(dead_code)]

use etl_core::RawUser;
use etl_source::{SourceError, SourceResult, UserSource};

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tempfile::TempDir;

/// In-memory source returning the same users on every fetch
pub struct StaticSource {
    users: Vec<RawUser>,
    fetches: Mutex<usize>,
}

impl StaticSource {
    pub fn new(users: Value) -> Self {
        let users = match users {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => map,
                    other => panic!("expected a JSON object, got {other}"),
                })
                .collect(),
            other => panic!("expected a JSON array, got {other}"),
        };

        Self {
            users,
            fetches: Mutex::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        *self.fetches.lock().unwrap()
    }
}

#[async_trait]
impl UserSource for StaticSource {
    async fn fetch_users(&self) -> SourceResult<Vec<RawUser>> {
        *self.fetches.lock().unwrap() += 1;
        Ok(self.users.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Source whose every fetch fails with a decode error
pub struct FailingSource;

#[async_trait]
impl UserSource for FailingSource {
    async fn fetch_users(&self) -> SourceResult<Vec<RawUser>> {
        let err = serde_json::from_str::<Vec<RawUser>>("not json").unwrap_err();
        Err(SourceError::from(err))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

/// Temp directory plus the store path inside it
pub fn create_test_store_dir() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("api_data.db");
    (dir, path)
}

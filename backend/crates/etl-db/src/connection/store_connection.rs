use crate::{DbError, Result};

use std::path::Path;

use log::debug;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Open the single-file store at `path`, creating the file and its parent
/// directory if missing.
///
/// The pool holds one connection: every statement of a run goes through the
/// same handle.
pub async fn open_store(path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DbError::store_dir(parent, e))?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    debug!("Opened store {}", path.display());

    Ok(pool)
}

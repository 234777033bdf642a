use crate::{Result as DbErrorResult, UserRecordRepository, open_store};

use etl_core::UserRecord;

use std::path::Path;

use log::{debug, warn};
use sqlx::SqlitePool;

/// One run's handle on the store.
///
/// Opened once per run and used for both table creation and the load, then
/// closed. Callers that cannot guarantee a `close()` on every path should use
/// [`Loader::run_once`] or [`Loader::scoped`].
pub struct Loader {
    pool: SqlitePool,
}

impl Loader {
    pub async fn open(path: &Path) -> DbErrorResult<Self> {
        let pool = open_store(path).await?;
        Ok(Self { pool })
    }

    /// Wrap an already open pool, e.g. an in-memory test store.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn ensure_schema(&self) -> DbErrorResult<()> {
        UserRecordRepository::create_table(&self.pool).await
    }

    /// Upsert every record inside one transaction and commit once.
    ///
    /// Returns the number of records loaded. On the first failing statement
    /// the transaction is dropped, which rolls back everything written so far.
    pub async fn load(&self, records: &[UserRecord]) -> DbErrorResult<u64> {
        let mut tx = self.pool.begin().await?;

        for record in records {
            if let Err(e) = UserRecordRepository::upsert(&mut *tx, record).await {
                warn!("Upsert of user {} failed, aborting batch: {}", record.id, e);
                return Err(e);
            }
        }

        tx.commit().await?;
        debug!("Committed {} user records", records.len());

        Ok(records.len() as u64)
    }

    pub async fn close(self) {
        self.pool.close().await;
    }

    /// Open the store, run `work` against it, and close it whether or not
    /// `work` succeeded.
    pub async fn scoped<F, T, E>(path: &Path, work: F) -> Result<T, E>
    where
        F: AsyncFnOnce(&Loader) -> Result<T, E>,
        E: From<crate::DbError>,
    {
        let loader = Self::open(path).await?;
        let result = work(&loader).await;
        loader.close().await;
        result
    }

    /// Ensure the table exists and load `records` through a single store handle.
    pub async fn run_once(path: &Path, records: &[UserRecord]) -> DbErrorResult<u64> {
        Self::scoped(path, async |loader: &Loader| -> DbErrorResult<u64> {
            loader.ensure_schema().await?;
            loader.load(records).await
        })
        .await
    }
}

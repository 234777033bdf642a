use crate::RunnerResult;

use etl_core::transform;
use etl_db::Loader;
use etl_source::UserSource;

use std::path::{Path, PathBuf};

use log::{debug, info};

/// Extract → transform → load against one source and one store file.
pub struct Pipeline<S> {
    source: S,
    database_path: PathBuf,
}

impl<S: UserSource> Pipeline<S> {
    pub fn new(source: S, database_path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            database_path: database_path.into(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Run one tick and return the number of records loaded.
    ///
    /// The store is opened once, the table is ensured before extraction, and
    /// the store is closed again whether or not the run succeeds.
    pub async fn run_once(&self) -> RunnerResult<u64> {
        info!("Running ETL pipeline...");

        let loaded = Loader::scoped(
            &self.database_path,
            async |loader: &Loader| -> RunnerResult<u64> {
                loader.ensure_schema().await?;

                let raw = self.source.fetch_users().await?;
                debug!(
                    "Extracted {} users from {}",
                    raw.len(),
                    self.source.describe()
                );

                let records = transform(&raw);

                Ok(loader.load(&records).await?)
            },
        )
        .await?;

        info!("Loaded {} records successfully.", loaded);

        Ok(loaded)
    }
}

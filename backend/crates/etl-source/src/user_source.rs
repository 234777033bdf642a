use crate::SourceResult;

use etl_core::RawUser;

use async_trait::async_trait;

/// Anything the pipeline can pull raw users from.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> SourceResult<Vec<RawUser>>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}

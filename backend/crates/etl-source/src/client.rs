use crate::{SourceError, SourceResult, UserSource};

use etl_core::RawUser;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as ReqwestClient;

/// HTTP client for the users endpoint
pub struct SourceClient {
    url: String,
    client: ReqwestClient,
}

impl SourceClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `url` - Full endpoint URL (e.g., "https://jsonplaceholder.typicode.com/users")
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Issue one GET and decode the body as a JSON array of objects.
    ///
    /// No retry. A non-2xx status fails before the body is read.
    pub async fn get_users(&self) -> SourceResult<Vec<RawUser>> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(SourceError::status(status.as_u16(), &self.url));
        }

        let body = response.bytes().await?;
        let users: Vec<RawUser> = serde_json::from_slice(&body)?;

        debug!("Fetched {} users from {}", users.len(), self.url);

        Ok(users)
    }
}

#[async_trait]
impl UserSource for SourceClient {
    async fn fetch_users(&self) -> SourceResult<Vec<RawUser>> {
        self.get_users().await
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

//! HTTP directory source

use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, HeaderValue};
use url::Url;

use crate::error::{DirectoryError, DirectoryResult};
use crate::traits::DirectorySource;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches the directory payload from the staff API, bypassing caches
pub struct RealHttpDirectorySource {
    client: reqwest::Client,
    url: Url,
}

impl RealHttpDirectorySource {
    pub fn new(url: Url) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl DirectorySource for RealHttpDirectorySource {
    async fn fetch(&self) -> DirectoryResult<String> {
        let response = self
            .client
            .get(self.url.clone())
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .send()
            .await
            .map_err(|e| DirectoryError::transport(format!("Request to {} failed: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(DirectoryError::http_status(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| DirectoryError::transport(format!("Failed to read response body: {}", e)))
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

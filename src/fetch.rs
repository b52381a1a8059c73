//! Page fetcher: obtains the raw HTML of the source page.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::config::ScraperConfig;
use crate::error::FetchError;

/// Boundary for obtaining the source document. The extraction pipeline
/// only ever sees the returned HTML text.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// HTTP implementation of [`PageFetcher`]. One attempt per call; retry
/// policy, if any, belongs to the caller.
pub struct HttpFetcher {
    http_client: HttpClient,
    config: ScraperConfig,
}

impl HttpFetcher {
    pub fn new(config: ScraperConfig) -> Result<Self, FetchError> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_sec))
            .build()?;
        Ok(Self {
            http_client,
            config,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self) -> Result<String, FetchError> {
        tracing::info!("fetching {}", self.config.url);
        let response = self
            .http_client
            .get(&self.config.url)
            .header("user-agent", self.config.user_agent.as_str())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::info!("received {} bytes, status: {}", body.len(), status.as_u16());

        if status.is_success() {
            Ok(body)
        } else {
            Err(FetchError::Status {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}

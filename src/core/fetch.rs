use crate::domain::ports::MenuSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the daily menu feed over HTTP. One GET per request, no retries;
/// the caller decides what a failure means for the reply.
pub struct HttpMenuSource {
    endpoint: String,
    client: Client,
}

impl HttpMenuSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl MenuSource for HttpMenuSource {
    async fn fetch_raw(&self) -> Result<String> {
        tracing::debug!("Requesting menu from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("Menu API response status: {}", response.status());
        let response = response.error_for_status()?;

        Ok(response.text().await?)
    }
}

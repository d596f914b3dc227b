use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use thiserror::Error;

/// Transport failure while relaying to the echo API
#[derive(Debug, Error)]
#[error("echo relay request failed: {0}")]
pub struct RelayError(#[from] reqwest::Error);

/// Echo API client
///
/// Sends a fixed empty JSON object. The response status and body are
/// never inspected; only transport failures surface as errors.
pub struct EchoClient {
    url: String,
    client: Client,
}

impl EchoClient {
    pub fn new(url: String, client: Client) -> Self {
        Self { url, client }
    }

    pub async fn relay_echo(&self) -> Result<(), RelayError> {
        tracing::debug!("Relaying echo request to: {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&serde_json::json!({}))
            .send()
            .await?;

        tracing::debug!("Echo relay answered with status {}", response.status());

        Ok(())
    }
}

use crate::core::filters::filter_by_time_range;
use crate::models::{QueryParameters, RandomUserPayload, RecordCollection, UserRecord};
use reqwest::Client;
use thiserror::Error;

/// Errors that can occur when fetching from the randomized-user API
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to user data API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid user data payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Randomized-user API client
///
/// Issues a single GET per call. Failures are reported immediately,
/// there is no retry.
pub struct RandomUserClient {
    base_url: String,
    client: Client,
}

impl RandomUserClient {
    pub fn new(base_url: String, client: Client) -> Self {
        Self { base_url, client }
    }

    /// Build the request URL, adding `results` only for a positive count
    pub fn request_url(&self, params: &QueryParameters) -> String {
        match params.result_count {
            Some(count) if count > 0 => format!("{}?results={}", self.base_url, count),
            _ => self.base_url.clone(),
        }
    }

    /// Fetch user records and apply the parameters' time window
    pub async fn fetch(&self, params: &QueryParameters) -> Result<RecordCollection, FetchError> {
        let url = self.request_url(params);

        tracing::debug!("Fetching user data from: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        let records = decode_records(&body)?;
        let fetched = records.len();

        let records = filter_by_time_range(records, params.from_time, params.to_time);

        tracing::debug!("Fetched {} records, {} within time range", fetched, records.len());

        Ok(RecordCollection::new(records))
    }
}

/// Decode an upstream body into flat records
pub fn decode_records(body: &[u8]) -> Result<Vec<UserRecord>, FetchError> {
    let payload: RandomUserPayload = serde_json::from_slice(body)?;
    Ok(payload.into())
}

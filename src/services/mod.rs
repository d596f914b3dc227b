// Service exports
pub mod echo;
pub mod randomuser;

pub use echo::{EchoClient, RelayError};
pub use randomuser::{FetchError, RandomUserClient};

use reqwest::Client;
use std::time::Duration;

/// Build the HTTP client shared by all upstream services
pub fn build_http_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

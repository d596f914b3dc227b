use serde::{Deserialize, Serialize};

/// Response for the relay endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayResponse {
    pub status: String,
    pub from: String,
    pub to: String,
}

impl RelayResponse {
    pub fn success(from: String, to: String) -> Self {
        Self {
            status: "Success".to_string(),
            from,
            to,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
///
/// Parameter validation failures carry only `error`; upstream failures
/// also carry the underlying `message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ErrorResponse {
    pub fn unprocessable(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            status_code: None,
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
            status_code: Some(status_code),
        }
    }
}

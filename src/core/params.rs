use chrono::{DateTime, FixedOffset};
use thiserror::Error;

use crate::models::QueryParameters;

/// Errors raised while parsing inbound query parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("\"results\" must be a number")]
    InvalidCount,

    #[error("invalid \"{0}\" time format, please use ISO 8601 format")]
    InvalidTimestamp(&'static str),
}

/// Parse the requested result count
///
/// An empty string yields `None`. Negative values are accepted as-is.
pub fn parse_result_count(raw: &str) -> Result<Option<i64>, ParseError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>()
        .map(Some)
        .map_err(|_| ParseError::InvalidCount)
}

/// Parse an RFC3339 timestamp (fractional seconds allowed, offset required)
pub fn parse_timestamp(
    raw: &str,
    field: &'static str,
) -> Result<Option<DateTime<FixedOffset>>, ParseError> {
    if raw.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(Some)
        .map_err(|_| ParseError::InvalidTimestamp(field))
}

impl QueryParameters {
    /// Build parameters from the raw `results`, `from` and `to` strings,
    /// stopping at the first invalid one
    pub fn from_raw(results: &str, from: &str, to: &str) -> Result<Self, ParseError> {
        let mut params = Self::default();
        params.parse_result_count(results)?;
        params.parse_from_timestamp(from)?;
        params.parse_to_timestamp(to)?;
        Ok(params)
    }

    pub fn parse_result_count(&mut self, raw: &str) -> Result<(), ParseError> {
        if let Some(count) = parse_result_count(raw)? {
            self.result_count = Some(count);
        }
        Ok(())
    }

    pub fn parse_from_timestamp(&mut self, raw: &str) -> Result<(), ParseError> {
        if let Some(from) = parse_timestamp(raw, "from")? {
            self.from_time = Some(from);
        }
        Ok(())
    }

    pub fn parse_to_timestamp(&mut self, raw: &str) -> Result<(), ParseError> {
        if let Some(to) = parse_timestamp(raw, "to")? {
            self.to_time = Some(to);
        }
        Ok(())
    }
}

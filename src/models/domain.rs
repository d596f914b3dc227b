use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Parsed query parameters for a single fetch request
///
/// Every field is optional: an absent value means "no constraint",
/// never a zero-valued constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryParameters {
    pub from_time: Option<DateTime<FixedOffset>>,
    pub to_time: Option<DateTime<FixedOffset>>,
    pub result_count: Option<i64>,
}

/// Flat user record returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub gender: String,
    pub first_name: String,
    pub last_name: String,
    pub postcode: i64,
    pub created_at: String,
}

/// Ordered list of user records, in the order the upstream API returned them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCollection {
    pub data: Vec<UserRecord>,
}

impl RecordCollection {
    pub fn new(data: Vec<UserRecord>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

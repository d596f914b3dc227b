use chrono::{DateTime, FixedOffset};

use crate::models::UserRecord;

/// Check whether a record timestamp lies strictly inside the window
///
/// Both bounds are exclusive. A timestamp that fails to parse never matches.
#[inline]
pub fn matches_time_range(
    created_at: &str,
    from: Option<DateTime<FixedOffset>>,
    to: Option<DateTime<FixedOffset>>,
) -> bool {
    let created_at = match DateTime::parse_from_rfc3339(created_at) {
        Ok(ts) => ts,
        Err(_) => return false,
    };

    if let Some(from) = from {
        if created_at <= from {
            return false;
        }
    }

    if let Some(to) = to {
        if created_at >= to {
            return false;
        }
    }

    true
}

/// Drop records outside the optional `(from, to)` window, preserving order
///
/// With neither bound set the records are returned untouched.
pub fn filter_by_time_range(
    records: Vec<UserRecord>,
    from: Option<DateTime<FixedOffset>>,
    to: Option<DateTime<FixedOffset>>,
) -> Vec<UserRecord> {
    if from.is_none() && to.is_none() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| matches_time_range(&record.created_at, from, to))
        .collect()
}

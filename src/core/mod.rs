// Core parsing and filtering exports
pub mod filters;
pub mod params;

pub use filters::{filter_by_time_range, matches_time_range};
pub use params::{parse_result_count, parse_timestamp, ParseError};

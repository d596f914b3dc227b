//! Userdata Proxy - HTTP proxy for randomized user data
//!
//! Exposes `GET /data`, which fetches user records from a randomized-user API
//! and narrows them to an optional registration-date window, and `POST /data`,
//! which relays a confirmation request to an echo API and echoes the input.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_by_time_range, ParseError};
pub use models::{QueryParameters, RecordCollection, UserRecord};
pub use services::{EchoClient, FetchError, RandomUserClient, RelayError};

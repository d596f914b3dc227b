// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod upstream;

pub use domain::{QueryParameters, RecordCollection, UserRecord};
pub use requests::RelayRequest;
pub use responses::{ErrorResponse, HealthResponse, RelayResponse};
pub use upstream::RandomUserPayload;

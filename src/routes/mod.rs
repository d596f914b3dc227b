// Route exports
pub mod data;

use actix_web::{error, http::StatusCode, web, HttpResponse};

pub use data::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(data::configure);
}

/// Rejected request input, rendered as a JSON 400
///
/// Covers bodies that are not a JSON object and query strings that
/// cannot be decoded at all; parameter values themselves are checked
/// by the handlers.
#[derive(Debug, serde::Serialize)]
pub struct RejectedInput {
    pub error: &'static str,
    pub message: String,
    pub status_code: u16,
}

impl RejectedInput {
    fn bad_request(error: &'static str, message: String) -> Self {
        Self {
            error,
            message,
            status_code: StatusCode::BAD_REQUEST.as_u16(),
        }
    }
}

impl std::fmt::Display for RejectedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for RejectedInput {}

impl error::ResponseError for RejectedInput {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Error handler for `web::JsonConfig`; the relay is never called
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Rejected {} body on {}: {}", req.method(), req.path(), err);
    RejectedInput::bad_request("invalid_json", format!("Invalid JSON: {}", err)).into()
}

/// Error handler for `web::QueryConfig`
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Rejected query string on {}: {}", req.path(), err);
    RejectedInput::bad_request("invalid_query", format!("Invalid query: {}", err)).into()
}

use actix_web::{web, HttpResponse, Responder};
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{ErrorResponse, HealthResponse, QueryParameters, RelayRequest, RelayResponse};
use crate::services::{EchoClient, RandomUserClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub randomuser: Arc<RandomUserClient>,
    pub echo: Arc<EchoClient>,
}

/// Configure the data routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/favicon.ico", web::get().to(favicon))
        .route("/data", web::get().to(fetch_records))
        .route("/data", web::post().to(relay_and_echo));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

async fn favicon() -> impl Responder {
    HttpResponse::NoContent().finish()
}

/// Fetch records endpoint
///
/// GET /data?results=10&from=2012-11-09T07:47:23.904Z&to=2019-11-09T07:47:23.904Z
///
/// All parameters are optional. `from` and `to` bound an open interval
/// on the records' registration date.
async fn fetch_records(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let params = match QueryParameters::from_raw(
        query_param(&query, "results"),
        query_param(&query, "from"),
        query_param(&query, "to"),
    ) {
        Ok(params) => params,
        Err(e) => {
            tracing::info!("Rejected query parameters: {}", e);
            return HttpResponse::UnprocessableEntity().json(ErrorResponse::unprocessable(e.to_string()));
        }
    };

    match state.randomuser.fetch(&params).await {
        Ok(records) => {
            tracing::info!("Returning {} records", records.len());
            HttpResponse::Ok().json(records)
        }
        Err(e) => {
            tracing::error!("Failed to fetch user data: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse::with_message(
                "Failed to fetch user data",
                e.to_string(),
                502,
            ))
        }
    }
}

fn query_param<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
    query.get(key).map(String::as_str).unwrap_or("")
}

/// Relay endpoint
///
/// POST /data
///
/// Request body:
/// ```json
/// { "from": "string", "to": "string" }
/// ```
///
/// Fires a confirmation request at the echo API and returns the caller's
/// own input. Body contents are not validated.
async fn relay_and_echo(
    state: web::Data<AppState>,
    req: web::Json<RelayRequest>,
) -> impl Responder {
    if let Err(e) = state.echo.relay_echo().await {
        tracing::error!("Echo relay failed: {}", e);
        return HttpResponse::BadGateway().json(ErrorResponse::with_message(
            "Echo relay failed",
            e.to_string(),
            502,
        ));
    }

    let RelayRequest { from, to } = req.into_inner();
    HttpResponse::Ok().json(RelayResponse::success(from, to))
}

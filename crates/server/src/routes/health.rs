use actix_web::{get, HttpResponse};

use crate::types::HealthResponse;

/// Liveness check
///
/// Constant response, no dependency on pipeline or config state.
#[get("/health")]
pub async fn health() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    }))
}

//! ReviewDigest HTTP Server
//!
//! Actix-web based REST API exposing the review summarization pipeline

pub mod routes;
pub mod state;
pub mod types;

use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, web, App, HttpRequest, HttpResponse, HttpServer};
use reviewdigest_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::state::AppState;
use crate::types::ErrorResponse;

/// Map JSON deserialization failures to 422 with an error body
///
/// Covers malformed bodies and unknown language codes; the handler is never
/// reached, so the pipeline is never invoked for invalid input.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    let response = HttpResponse::UnprocessableEntity().json(ErrorResponse { detail });
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Start the HTTP server
///
/// Builds shared state eagerly (artifact load, client construction) so
/// configuration problems abort startup.
pub async fn start_server(config: AppConfig) -> Result<()> {
    config.validate()?;

    let bind_address = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);

    info!("Starting HTTP server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(routes::health::health)
            .service(routes::summarize::summarize)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}

//! Health check endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health-check", web::get().to(health_check));
}

/// Plain `OK` once storage answers
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");
    state.storage.health_check().await?;
    Ok(HttpResponse::Ok().content_type("text/plain").body("OK"))
}

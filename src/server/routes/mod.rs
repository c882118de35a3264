//! HTTP route modules
//!
//! Everything is mounted under `/api`.

pub mod auth;
pub mod health;
pub mod users;
pub mod workers;

use actix_web::web;
use serde::Serialize;

/// Body of the liveness-style endpoints
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Configure every API route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure_routes)
            .configure(auth::configure_routes)
            .configure(users::configure_routes)
            .configure(workers::configure_routes),
    );
}

//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::server::middleware::ErrorStack;
use crate::server::routes;
use crate::server::state::AppState;
use crate::services::build_mailer;
use crate::storage::StorageLayer;
use crate::utils::clock::SystemClock;
use crate::utils::error::{Result, ServiceError};
use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer as ActixHttpServer, web};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let storage = StorageLayer::new(&config.storage).await?;
        let mailer = build_mailer(&config.mail, config.server.environment)?;
        info!("Mail delivery through: {}", mailer.name());

        let state = AppState::new(config.clone(), storage, mailer, Arc::new(SystemClock))?;

        match state.auth.purge_expired_reset_tokens().await {
            Ok(purged) => info!("Purged {} stale password reset tokens", purged),
            Err(e) => warn!("Failed to purge password reset tokens: {}", e),
        }

        Ok(Self {
            config: config.server.clone(),
            state,
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let server_config = &state.config.server;
        let show_stack = server_config.environment.is_development();

        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
        if server_config.cors_allowed_origins.is_empty() {
            cors = cors.allow_any_origin();
        } else {
            for origin in &server_config.cors_allowed_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        App::new()
            .app_data(state)
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                ServiceError::Validation(err.to_string()).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                ServiceError::Validation(err.to_string()).into()
            }))
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                ServiceError::Validation(err.to_string()).into()
            }))
            .configure(routes::configure_routes)
            .default_service(web::to(api_not_found))
            .wrap(ErrorStack::new(show_stack))
            .wrap(TracingLogger::default())
            .wrap(cors)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();

        info!(
            "Starting HTTP server on {} ({})",
            bind_addr, self.config.environment
        );

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(self.config.worker_count())
            .client_request_timeout(Duration::from_secs(self.config.request_timeout))
            .bind(&bind_addr)
            .map_err(|e| ServiceError::Config(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server.await?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

async fn api_not_found() -> Result<HttpResponse> {
    Err(ServiceError::not_found("API not found"))
}

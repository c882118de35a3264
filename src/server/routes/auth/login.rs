//! Login endpoints

use crate::server::extractors::AccessAuth;
use crate::server::state::AppState;
use crate::utils::auth::parse_basic_credentials;
use crate::utils::error::ServiceError;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::debug;

/// Exchange basic credentials for `{user, tokens}`
pub async fn login(state: web::Data<AppState>, req: HttpRequest) -> ActixResult<HttpResponse> {
    let credentials = parse_basic_credentials(req.headers()).ok_or_else(|| {
        debug!("Login without basic credentials");
        ServiceError::unauthorized("Missing basic credentials")
    })?;

    let session = state.auth.login(&credentials).await?;
    Ok(HttpResponse::Ok().json(session))
}

/// The account behind the access token
pub async fn current_user(auth: AccessAuth) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(auth.0))
}

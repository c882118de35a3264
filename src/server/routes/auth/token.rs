//! Token refresh and token checks

use crate::server::extractors::{AccessAuth, RefreshAuth};
use crate::server::routes::StatusResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};

/// New access token for the refresh token's account
pub async fn refresh_token(
    state: web::Data<AppState>,
    auth: RefreshAuth,
) -> ActixResult<HttpResponse> {
    let token = state.auth.refresh_access_token(&auth.0)?;
    Ok(HttpResponse::Ok().json(token))
}

pub async fn check_access(_auth: AccessAuth) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(StatusResponse::ok()))
}

pub async fn check_refresh(_auth: RefreshAuth) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(StatusResponse::ok()))
}

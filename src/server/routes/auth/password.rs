//! Password reset endpoints

use super::models::{ForgotPasswordRequest, NewPasswordRequest, ResetTokenRequest};
use crate::server::extractors::PasswordChangeAuth;
use crate::server::routes::StatusResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};

/// Mail a reset link; answers the same whether or not the account exists
pub async fn forgot_password(
    state: web::Data<AppState>,
    request: web::Json<ForgotPasswordRequest>,
) -> ActixResult<HttpResponse> {
    state.auth.request_password_reset(&request.email).await?;
    Ok(HttpResponse::Ok().json(StatusResponse::ok()))
}

/// Trade a reset token for a password-change token
pub async fn redeem_reset_token(
    state: web::Data<AppState>,
    request: web::Json<ResetTokenRequest>,
) -> ActixResult<HttpResponse> {
    let token = state.auth.redeem_reset_token(&request.token).await?;
    Ok(HttpResponse::Ok().json(token))
}

/// Set the password of the account behind a password-change token
pub async fn change_password(
    state: web::Data<AppState>,
    auth: PasswordChangeAuth,
    request: web::Json<NewPasswordRequest>,
) -> ActixResult<HttpResponse> {
    let user = state
        .auth
        .change_password(auth.0, &request.into_inner().password)
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

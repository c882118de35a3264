//! Request authentication extractors
//!
//! Each extractor resolves the calling account or fails the request with 401
//! before the handler body runs.

use crate::auth::TokenType;
use crate::core::models::User;
use crate::server::state::AppState;
use crate::utils::auth::{extract_bearer_token, parse_basic_credentials};
use crate::utils::error::ServiceError;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::LocalBoxFuture;
use tracing::debug;

fn app_state(req: &HttpRequest) -> Result<web::Data<AppState>, ServiceError> {
    req.app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| ServiceError::internal("Application state is not configured"))
}

fn bearer_user(
    req: &HttpRequest,
    token_type: TokenType,
) -> LocalBoxFuture<'static, Result<User, actix_web::Error>> {
    let state = app_state(req);
    let token = extract_bearer_token(req.headers());

    Box::pin(async move {
        let state = state?;
        let token = token.ok_or_else(|| {
            debug!("Request without bearer token");
            ServiceError::unauthorized("Missing bearer token")
        })?;

        let user = match token_type {
            TokenType::Access => state.auth.authenticate_access(&token).await?,
            TokenType::Refresh => state.auth.authenticate_refresh(&token).await?,
            TokenType::PasswordChange => state.auth.authenticate_password_change(&token).await?,
        };
        Ok(user)
    })
}

/// Account authenticated by a bearer access token
#[derive(Debug, Clone)]
pub struct AccessAuth(pub User);

impl FromRequest for AccessAuth {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = bearer_user(req, TokenType::Access);
        Box::pin(async move { user.await.map(AccessAuth) })
    }
}

/// Account authenticated by a bearer refresh token
#[derive(Debug, Clone)]
pub struct RefreshAuth(pub User);

impl FromRequest for RefreshAuth {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = bearer_user(req, TokenType::Refresh);
        Box::pin(async move { user.await.map(RefreshAuth) })
    }
}

/// Account authenticated by a bearer password-change token
#[derive(Debug, Clone)]
pub struct PasswordChangeAuth(pub User);

impl FromRequest for PasswordChangeAuth {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = bearer_user(req, TokenType::PasswordChange);
        Box::pin(async move { user.await.map(PasswordChangeAuth) })
    }
}

/// Account authenticated by HTTP basic credentials (email and password)
#[derive(Debug, Clone)]
pub struct BasicAuth(pub User);

impl FromRequest for BasicAuth {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = app_state(req);
        let credentials = parse_basic_credentials(req.headers());

        Box::pin(async move {
            let state = state?;
            let credentials = credentials
                .ok_or_else(|| ServiceError::unauthorized("Missing basic credentials"))?;
            let user = state.auth.authenticate_basic(&credentials).await?;
            Ok(BasicAuth(user))
        })
    }
}

//! Account endpoints

use crate::core::models::UserListQuery;
use crate::server::extractors::{AccessAuth, BasicAuth};
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};

/// Configure account routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(create_user))
            .route("", web::get().to(list_users))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user))
            .route("/{id}/password", web::put().to(update_password)),
    );
}

/// Register; responds with `{user, tokens}`
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    let session = state.users.create(None, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(session))
}

pub async fn list_users(
    state: web::Data<AppState>,
    auth: AccessAuth,
    query: web::Query<UserListQuery>,
) -> ActixResult<HttpResponse> {
    let page = state.users.list(&auth.0, query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(page))
}

pub async fn get_user(
    state: web::Data<AppState>,
    auth: AccessAuth,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let user = state.users.get(&auth.0, &id).await?;
    Ok(HttpResponse::Ok().json(user))
}

pub async fn update_user(
    state: web::Data<AppState>,
    auth: AccessAuth,
    id: web::Path<String>,
    body: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    let user = state
        .users
        .update(&auth.0, &id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Authenticated with the current email and password
pub async fn update_password(
    state: web::Data<AppState>,
    auth: BasicAuth,
    id: web::Path<String>,
    body: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    let user = state
        .users
        .update_password(&auth.0, &id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Responds with the deleted account
pub async fn delete_user(
    state: web::Data<AppState>,
    auth: AccessAuth,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let user = state.users.delete(&auth.0, &id).await?;
    Ok(HttpResponse::Ok().json(user))
}

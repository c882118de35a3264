//! Worker endpoints

use crate::core::models::WorkerListQuery;
use crate::server::extractors::AccessAuth;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};

/// Configure worker routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/workers")
            .route("", web::post().to(create_worker))
            .route("", web::get().to(list_workers))
            .route("/{id}", web::get().to(get_worker))
            .route("/{id}", web::put().to(update_worker))
            .route("/{id}", web::delete().to(delete_worker)),
    );
}

pub async fn create_worker(
    state: web::Data<AppState>,
    auth: AccessAuth,
    body: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    let worker = state.workers.create(&auth.0, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(worker))
}

pub async fn list_workers(
    state: web::Data<AppState>,
    auth: AccessAuth,
    query: web::Query<WorkerListQuery>,
) -> ActixResult<HttpResponse> {
    let page = state.workers.list(&auth.0, query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(page))
}

pub async fn get_worker(
    state: web::Data<AppState>,
    auth: AccessAuth,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let worker = state.workers.get(&auth.0, &id).await?;
    Ok(HttpResponse::Ok().json(worker))
}

/// Partial update
pub async fn update_worker(
    state: web::Data<AppState>,
    auth: AccessAuth,
    id: web::Path<String>,
    body: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    let worker = state
        .workers
        .update(&auth.0, &id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(worker))
}

/// Responds with the deleted worker
pub async fn delete_worker(
    state: web::Data<AppState>,
    auth: AccessAuth,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let worker = state.workers.delete(&auth.0, &id).await?;
    Ok(HttpResponse::Ok().json(worker))
}

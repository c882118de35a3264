//! The HTTP API over the SeaORM store

use crate::common::{TestContext, test_app};
use crate::common::fixtures::{
    PASSWORD, UserFactory, WorkerFactory, access_token, authed, login_request, register_request,
};
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use serde_json::{Value, json};

#[actix_web::test]
async fn test_accounts_persist_through_sqlite() {
    let ctx = TestContext::sqlite().await;
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let payload = UserFactory::with_email("db@example.com");
    let resp = test::call_service(&app, register_request(&payload).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, register_request(&payload).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Duplicated field is not allowed");

    let resp =
        test::call_service(&app, login_request("db@example.com", PASSWORD).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let stats = ctx.state.storage.database.as_ref().unwrap().stats().await.unwrap();
    assert_eq!(stats.total_users, 1);
}

#[actix_web::test]
async fn test_workers_persist_through_sqlite() {
    let ctx = TestContext::sqlite().await;
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let session: Value = test::call_and_read_body_json(
        &app,
        register_request(&UserFactory::create()).to_request(),
    )
    .await;
    let token = access_token(&session);

    for (fullname, salary) in [("Tony Stark", 1000.0), ("Bruce Banner", 1200.25)] {
        ctx.clock.advance(chrono::Duration::seconds(1));
        let req = authed(TestRequest::post().uri("/api/workers"), &token)
            .set_json(WorkerFactory::create(fullname, "Scientist", salary));
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = authed(TestRequest::get().uri("/api/workers?fullname=banner"), &token);
    let page: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(page["total"], 1);
    assert_eq!(page["docs"][0]["salary"], 1200.25);

    let id = page["docs"][0]["id"].as_str().unwrap().to_string();
    let req = authed(
        TestRequest::put().uri(&format!("/api/workers/{}", id)),
        &token,
    )
    .set_json(json!({ "contacts": { "mobileNumber": "+15551234567" } }));
    let updated: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(updated["contacts"]["mobileNumber"], "+15551234567");
}

#[actix_web::test]
async fn test_password_reset_through_sqlite() {
    let ctx = TestContext::sqlite().await;
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let payload = UserFactory::create();
    test::call_service(&app, register_request(&payload).to_request()).await;

    let req = TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(json!({ "email": payload["email"] }));
    test::call_service(&app, req.to_request()).await;
    let token = ctx.outbox.reset_token(1).await;

    let redeem = || {
        TestRequest::post()
            .uri("/api/auth/reset-token")
            .set_json(json!({ "token": token }))
            .to_request()
    };
    assert_eq!(
        test::call_service(&app, redeem()).await.status(),
        StatusCode::OK
    );
    assert_eq!(
        test::call_service(&app, redeem()).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let purged = ctx.state.auth.purge_expired_reset_tokens().await.unwrap();
    assert_eq!(purged, 1);
}

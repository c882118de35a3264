//! Login, token and password reset flows over HTTP

use crate::common::{TestContext, test_app};
use crate::common::fixtures::{
    PASSWORD, UserFactory, access_token, authed, login_request, refresh_token, register_request,
};
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use serde_json::{Value, json};

#[actix_web::test]
async fn test_health_check() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let req = TestRequest::get().uri("/api/health-check").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"OK");
}

#[actix_web::test]
async fn test_unknown_route() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let req = TestRequest::get().uri("/api/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "API not found" }));
}

#[actix_web::test]
async fn test_register_then_login() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let payload = UserFactory::create();
    let email = payload["email"].as_str().unwrap().to_string();
    let session: Value =
        test::call_and_read_body_json(&app, register_request(&payload).to_request()).await;
    assert_eq!(session["user"]["email"], email.as_str());
    assert!(session["user"].get("passwordHash").is_none());
    assert!(session["tokens"]["access"]["expiresAt"].is_i64());

    let resp = test::call_service(&app, login_request(&email, PASSWORD).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let login: Value = test::read_body_json(resp).await;

    let req = authed(TestRequest::get().uri("/api/auth/login"), &access_token(&login));
    let me: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(me["email"], email.as_str());
}

#[actix_web::test]
async fn test_login_rejections_look_alike() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let payload = UserFactory::create();
    let email = payload["email"].as_str().unwrap().to_string();
    test::call_service(&app, register_request(&payload).to_request()).await;

    let wrong_password =
        test::call_service(&app, login_request(&email, "Wrong1234").to_request()).await;
    let unknown_email =
        test::call_service(&app, login_request("ghost@example.com", PASSWORD).to_request()).await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let a: Value = test::read_body_json(wrong_password).await;
    let b: Value = test::read_body_json(unknown_email).await;
    assert_eq!(a, b);
    assert_eq!(a["message"], "Unauthorized");
}

#[actix_web::test]
async fn test_missing_credentials() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let req = TestRequest::post().uri("/api/auth/login").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = TestRequest::get().uri("/api/auth/check-access").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_token_types_are_not_interchangeable() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let session: Value = test::call_and_read_body_json(
        &app,
        register_request(&UserFactory::create()).to_request(),
    )
    .await;
    let access = access_token(&session);
    let refresh = refresh_token(&session);

    let req = authed(TestRequest::get().uri("/api/auth/check-access"), &access);
    let body: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(body, json!({ "status": "ok" }));

    let req = authed(TestRequest::get().uri("/api/auth/check-refresh"), &refresh);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = authed(TestRequest::get().uri("/api/auth/check-access"), &refresh);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = authed(TestRequest::get().uri("/api/auth/check-refresh"), &access);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_refresh_issues_new_access_token() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let session: Value = test::call_and_read_body_json(
        &app,
        register_request(&UserFactory::create()).to_request(),
    )
    .await;

    // Past the access lifetime, well within the refresh lifetime
    ctx.clock.advance(chrono::Duration::seconds(3601));

    let req = authed(
        TestRequest::get().uri("/api/auth/check-access"),
        &access_token(&session),
    );
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = authed(
        TestRequest::get().uri("/api/auth/token"),
        &refresh_token(&session),
    );
    let issued: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    let fresh = issued["token"].as_str().unwrap();
    assert!(issued["expiresAt"].is_i64());

    let req = authed(TestRequest::get().uri("/api/auth/check-access"), fresh);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_password_reset_flow() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let payload = UserFactory::create();
    let email = payload["email"].as_str().unwrap().to_string();
    let session: Value =
        test::call_and_read_body_json(&app, register_request(&payload).to_request()).await;

    let req = TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(json!({ "email": email }));
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let reset_token = ctx.outbox.reset_token(1).await;
    let sent = ctx.outbox.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, email);
    assert!(sent[0].html.contains("http://workforce.test/reset-password?token="));

    let req = TestRequest::post()
        .uri("/api/auth/reset-token")
        .set_json(json!({ "token": reset_token }));
    let issued: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    let change_token = issued["token"].as_str().unwrap().to_string();

    // Single use
    let req = TestRequest::post()
        .uri("/api/auth/reset-token")
        .set_json(json!({ "token": reset_token }));
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // The password-change token is not an access token
    let req = authed(TestRequest::get().uri("/api/auth/check-access"), &change_token);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = authed(TestRequest::put().uri("/api/auth/password"), &change_token)
        .set_json(json!({ "password": "Brandnew9!" }));
    let user: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(user["email"], email.as_str());

    // Old tokens died with the old secret
    let req = authed(
        TestRequest::get().uri("/api/auth/check-access"),
        &access_token(&session),
    );
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = authed(TestRequest::put().uri("/api/auth/password"), &change_token)
        .set_json(json!({ "password": "Another9!x" }));
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(&app, login_request(&email, PASSWORD).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let resp = test::call_service(&app, login_request(&email, "Brandnew9!").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_reset_token_expires() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let payload = UserFactory::create();
    test::call_service(&app, register_request(&payload).to_request()).await;

    let req = TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(json!({ "email": payload["email"] }));
    test::call_service(&app, req.to_request()).await;
    let reset_token = ctx.outbox.reset_token(1).await;

    ctx.clock.advance(chrono::Duration::seconds(3601));

    let req = TestRequest::post()
        .uri("/api/auth/reset-token")
        .set_json(json!({ "token": reset_token }));
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_repeated_forgot_password_mails_once() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let payload = UserFactory::create();
    test::call_service(&app, register_request(&payload).to_request()).await;

    let forgot = || {
        TestRequest::post()
            .uri("/api/auth/forgot-password")
            .set_json(json!({ "email": payload["email"] }))
            .to_request()
    };
    let body: Value = test::call_and_read_body_json(&app, forgot()).await;
    assert_eq!(body, json!({ "status": "ok" }));
    let first = ctx.outbox.reset_token(1).await;

    // same answer while the first token is live, but no new mail
    let body: Value = test::call_and_read_body_json(&app, forgot()).await;
    assert_eq!(body, json!({ "status": "ok" }));
    tokio::task::yield_now().await;
    assert_eq!(ctx.outbox.sent().len(), 1);

    ctx.clock.advance(chrono::Duration::seconds(3601));
    test::call_service(&app, forgot()).await;
    let second = ctx.outbox.reset_token(2).await;
    assert_ne!(first, second);
}

#[actix_web::test]
async fn test_forgot_password_unknown_email_is_silent() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let req = TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(json!({ "email": "nobody@example.com" }));
    let body: Value = test::call_and_read_body_json(&app, req.to_request()).await;

    assert_eq!(body, json!({ "status": "ok" }));
    assert!(ctx.outbox.sent().is_empty());
}

#[actix_web::test]
async fn test_forgot_password_rejects_unknown_fields() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let req = TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(json!({ "email": "a@example.com", "admin": true }));
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

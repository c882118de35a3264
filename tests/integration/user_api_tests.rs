//! Account endpoints over HTTP

use crate::common::{TestContext, test_app};
use crate::common::fixtures::{
    PASSWORD, UserFactory, access_token, authed, basic_header, login_request, register_request,
    user_id,
};
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use serde_json::{Value, json};
use uuid::Uuid;

#[actix_web::test]
async fn test_register_validation() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let mut payload = UserFactory::create();
    payload["email"] = json!("not-an-email");
    let resp = test::call_service(&app, register_request(&payload).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("email"));

    let mut payload = UserFactory::create();
    payload["password"] = json!("short");
    let resp = test::call_service(&app, register_request(&payload).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let mut payload = UserFactory::create();
    payload["role"] = json!("admin");
    let resp = test::call_service(&app, register_request(&payload).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_register_duplicate_email() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let first = UserFactory::with_email("dup@example.com");
    let resp = test::call_service(&app, register_request(&first).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Emails are normalized before the uniqueness check
    let second = UserFactory::with_email("DUP@example.com");
    let resp = test::call_service(&app, register_request(&second).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Duplicated field is not allowed");
}

#[actix_web::test]
async fn test_profile_is_owner_only() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let alice: Value = test::call_and_read_body_json(
        &app,
        register_request(&UserFactory::create()).to_request(),
    )
    .await;
    let bob: Value = test::call_and_read_body_json(
        &app,
        register_request(&UserFactory::create()).to_request(),
    )
    .await;
    let token = access_token(&alice);

    let req = authed(
        TestRequest::get().uri(&format!("/api/users/{}", user_id(&alice))),
        &token,
    );
    let me: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(me["id"], alice["user"]["id"]);

    let req = authed(
        TestRequest::get().uri(&format!("/api/users/{}", user_id(&bob))),
        &token,
    );
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Forbidden");

    let req = authed(
        TestRequest::delete().uri(&format!("/api/users/{}", user_id(&bob))),
        &token,
    );
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_get_missing_and_malformed_ids() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let session: Value = test::call_and_read_body_json(
        &app,
        register_request(&UserFactory::create()).to_request(),
    )
    .await;
    let token = access_token(&session);

    let req = authed(
        TestRequest::get().uri(&format!("/api/users/{}", Uuid::new_v4())),
        &token,
    );
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No such user exists");

    let req = authed(TestRequest::get().uri("/api/users/not-a-uuid"), &token);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_users() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let mut token = String::new();
    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        let session: Value = test::call_and_read_body_json(
            &app,
            register_request(&UserFactory::with_email(email)).to_request(),
        )
        .await;
        token = access_token(&session);
    }

    let req = TestRequest::get().uri("/api/users").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = authed(TestRequest::get().uri("/api/users?limit=2"), &token);
    let page: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(page["total"], 3);
    assert_eq!(page["limit"], 2);
    assert_eq!(page["offset"], 0);
    let emails: Vec<&str> = page["docs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, vec!["c@example.com", "b@example.com"]);

    let req = authed(
        TestRequest::get().uri("/api/users?email=B@example.com"),
        &token,
    );
    let page: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(page["total"], 1);
    assert_eq!(page["docs"][0]["email"], "b@example.com");

    let req = authed(TestRequest::get().uri("/api/users?limit=0"), &token);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_profile() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let session: Value = test::call_and_read_body_json(
        &app,
        register_request(&UserFactory::create()).to_request(),
    )
    .await;
    let token = access_token(&session);
    let uri = format!("/api/users/{}", user_id(&session));

    let req = authed(TestRequest::put().uri(&uri), &token).set_json(json!({ "username": "renamed" }));
    let user: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(user["username"], "renamed");
    assert_eq!(user["email"], session["user"]["email"]);

    // Passwords only change through the dedicated endpoints
    let req = authed(TestRequest::put().uri(&uri), &token)
        .set_json(json!({ "password": "Brandnew9!" }));
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_password_with_basic_credentials() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let payload = UserFactory::create();
    let email = payload["email"].as_str().unwrap().to_string();
    let session: Value =
        test::call_and_read_body_json(&app, register_request(&payload).to_request()).await;
    let uri = format!("/api/users/{}/password", user_id(&session));

    // A bearer token is not enough
    let req = authed(TestRequest::put().uri(&uri), &access_token(&session))
        .set_json(json!({ "password": "Brandnew9!" }));
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = TestRequest::put()
        .uri(&uri)
        .insert_header(basic_header(&email, PASSWORD))
        .set_json(json!({ "password": "Brandnew9!" }));
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = authed(
        TestRequest::get().uri("/api/auth/check-access"),
        &access_token(&session),
    );
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(&app, login_request(&email, "Brandnew9!").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_delete_account() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let payload = UserFactory::create();
    let email = payload["email"].as_str().unwrap().to_string();
    let session: Value =
        test::call_and_read_body_json(&app, register_request(&payload).to_request()).await;
    let token = access_token(&session);

    let req = authed(
        TestRequest::delete().uri(&format!("/api/users/{}", user_id(&session))),
        &token,
    );
    let deleted: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(deleted["email"], email.as_str());

    let req = authed(TestRequest::get().uri("/api/auth/check-access"), &token);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(&app, login_request(&email, PASSWORD).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

//! Worker endpoints over HTTP

use crate::common::{TestContext, test_app};
use crate::common::fixtures::{UserFactory, WorkerFactory, access_token, authed, register_request};
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use serde_json::{Value, json};
use uuid::Uuid;

/// Register a fresh account and yield its access token
macro_rules! signed_up {
    ($app:expr) => {{
        let session: Value = test::call_and_read_body_json(
            $app,
            register_request(&UserFactory::create()).to_request(),
        )
        .await;
        access_token(&session)
    }};
}

#[actix_web::test]
async fn test_workers_require_authentication() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;

    let req = TestRequest::get().uri("/api/workers").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = TestRequest::post()
        .uri("/api/workers")
        .set_json(WorkerFactory::create("Tony Stark", "Engineer", 1000.0))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_worker_crud() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;
    let token = signed_up!(&app);

    let req = authed(TestRequest::post().uri("/api/workers"), &token)
        .set_json(WorkerFactory::create("Tony Stark", "Engineer", 1000.5));
    let worker: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(worker["fullname"], "Tony Stark");
    assert_eq!(worker["salary"], 1000.5);
    assert_eq!(worker["contacts"]["email"], "worker@example.com");
    let uri = format!("/api/workers/{}", worker["id"].as_str().unwrap());

    let req = authed(TestRequest::get().uri(&uri), &token);
    let fetched: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(fetched, worker);

    let req = authed(TestRequest::put().uri(&uri), &token)
        .set_json(json!({ "position": "Chief Engineer", "salary": 2000 }));
    let updated: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(updated["position"], "Chief Engineer");
    assert_eq!(updated["salary"], 2000.0);
    assert_eq!(updated["fullname"], "Tony Stark");

    let req = authed(TestRequest::delete().uri(&uri), &token);
    let deleted: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(deleted["id"], worker["id"]);

    let req = authed(TestRequest::get().uri(&uri), &token);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_worker_validation() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;
    let token = signed_up!(&app);

    let mut payload = WorkerFactory::create("Tony Stark", "Engineer", 1000.0);
    payload["gender"] = json!("robot");
    let req = authed(TestRequest::post().uri("/api/workers"), &token).set_json(payload);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let mut payload = WorkerFactory::create("Tony Stark", "Engineer", 1000.0);
    payload["id"] = json!(Uuid::new_v4());
    let req = authed(TestRequest::post().uri("/api/workers"), &token).set_json(payload);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = authed(
        TestRequest::put().uri(&format!("/api/workers/{}", Uuid::new_v4())),
        &token,
    )
    .set_json(json!({ "salary": 10 }));
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_list_workers_search_and_order() {
    let ctx = TestContext::in_memory();
    let app = test::init_service(test_app(ctx.state.clone())).await;
    let token = signed_up!(&app);

    for (fullname, position, salary) in [
        ("Tony Stark", "Engineer", 1000.0),
        ("Pepper Potts", "Chief Executive", 3000.0),
        ("Starkey Smith", "Engineer", 1500.0),
    ] {
        ctx.clock.advance(chrono::Duration::seconds(1));
        let req = authed(TestRequest::post().uri("/api/workers"), &token)
            .set_json(WorkerFactory::create(fullname, position, salary));
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let names = |page: &Value| -> Vec<String> {
        page["docs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["fullname"].as_str().unwrap().to_string())
            .collect()
    };

    // Newest first
    let req = authed(TestRequest::get().uri("/api/workers"), &token);
    let page: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(page["total"], 3);
    assert_eq!(
        names(&page),
        vec!["Starkey Smith", "Pepper Potts", "Tony Stark"]
    );

    // Whole words only
    let req = authed(TestRequest::get().uri("/api/workers?fullname=Stark"), &token);
    let page: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(names(&page), vec!["Tony Stark"]);

    let req = authed(TestRequest::get().uri("/api/workers?position=engine"), &token);
    let page: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(page["total"], 2);

    let req = authed(TestRequest::get().uri("/api/workers?salary=3000"), &token);
    let page: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(names(&page), vec!["Pepper Potts"]);

    let req = authed(
        TestRequest::get().uri("/api/workers?skip=1&limit=1"),
        &token,
    );
    let page: Value = test::call_and_read_body_json(&app, req.to_request()).await;
    assert_eq!(page["total"], 3);
    assert_eq!(page["offset"], 1);
    assert_eq!(names(&page), vec!["Pepper Potts"]);
}

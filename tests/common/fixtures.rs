//! Request factories for the HTTP API

use actix_web::http::header;
use actix_web::test::TestRequest;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use uuid::Uuid;

/// Password accepted by the validator
pub const PASSWORD: &str = "Secret12!";

/// Registration payloads
pub struct UserFactory;

impl UserFactory {
    /// Unique email and username
    pub fn create() -> Value {
        let suffix = &Uuid::new_v4().simple().to_string()[..8];
        Self::with_email(&format!("user-{}@example.com", suffix))
    }

    pub fn with_email(email: &str) -> Value {
        let suffix = &Uuid::new_v4().simple().to_string()[..8];
        json!({
            "email": email,
            "username": format!("user_{}", suffix),
            "password": PASSWORD,
        })
    }
}

/// Worker payloads
pub struct WorkerFactory;

impl WorkerFactory {
    pub fn create(fullname: &str, position: &str, salary: f64) -> Value {
        json!({
            "gender": "female",
            "fullname": fullname,
            "position": position,
            "salary": salary,
            "contacts": { "email": "worker@example.com" },
        })
    }
}

pub fn basic_header(email: &str, password: &str) -> (header::HeaderName, String) {
    let encoded = STANDARD.encode(format!("{}:{}", email, password));
    (header::AUTHORIZATION, format!("Basic {}", encoded))
}

pub fn bearer_header(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub fn register_request(payload: &Value) -> TestRequest {
    TestRequest::post().uri("/api/users").set_json(payload)
}

pub fn login_request(email: &str, password: &str) -> TestRequest {
    TestRequest::post()
        .uri("/api/auth/login")
        .insert_header(basic_header(email, password))
}

/// Attach an access, refresh or password-change token
pub fn authed(request: TestRequest, token: &str) -> TestRequest {
    request.insert_header(bearer_header(token))
}

/// Access token of a registration or login response
pub fn access_token(session: &Value) -> String {
    session["tokens"]["access"]["token"]
        .as_str()
        .expect("session without access token")
        .to_string()
}

pub fn refresh_token(session: &Value) -> String {
    session["tokens"]["refresh"]["token"]
        .as_str()
        .expect("session without refresh token")
        .to_string()
}

pub fn user_id(session: &Value) -> String {
    session["user"]["id"]
        .as_str()
        .expect("session without user id")
        .to_string()
}

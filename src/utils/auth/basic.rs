//! Authorization header parsing

use actix_web::http::header::HeaderMap;
use base64::{Engine as _, engine::general_purpose};

/// Credentials carried by an HTTP Basic `Authorization` header
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn authorization_value(headers: &HeaderMap) -> Option<&str> {
    headers.get("authorization").and_then(|h| h.to_str().ok())
}

/// Extract a bearer token from the `Authorization` header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = authorization_value(headers)?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))?
        .trim();

    (!token.is_empty()).then(|| token.to_string())
}

/// Decode `Authorization: Basic base64(email:password)`
pub fn parse_basic_credentials(headers: &HeaderMap) -> Option<BasicCredentials> {
    let value = authorization_value(headers)?;
    let encoded = value
        .strip_prefix("Basic ")
        .or_else(|| value.strip_prefix("basic "))?
        .trim();

    let decoded = general_purpose::STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (email, password) = decoded.split_once(':')?;

    if email.is_empty() || password.is_empty() {
        return None;
    }

    Some(BasicCredentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

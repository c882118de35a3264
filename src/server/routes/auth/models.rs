//! Request bodies of the authentication endpoints

use serde::Deserialize;

/// `POST /api/auth/forgot-password`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// `POST /api/auth/reset-token`
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResetTokenRequest {
    pub token: String,
}

impl std::fmt::Debug for ResetTokenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetTokenRequest")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// `PUT /api/auth/password`
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPasswordRequest {
    pub password: String,
}

impl std::fmt::Debug for NewPasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewPasswordRequest")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

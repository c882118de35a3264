//! Authentication endpoints

mod login;
mod models;
mod password;
mod token;

pub use login::{current_user, login};
pub use models::{ForgotPasswordRequest, NewPasswordRequest, ResetTokenRequest};
pub use password::{change_password, forgot_password, redeem_reset_token};
pub use token::{check_access, check_refresh, refresh_token};

use actix_web::web;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/login", web::get().to(current_user))
            .route("/token", web::get().to(refresh_token))
            .route("/check-access", web::get().to(check_access))
            .route("/check-refresh", web::get().to(check_refresh))
            .route("/forgot-password", web::post().to(forgot_password))
            .route("/reset-token", web::post().to(redeem_reset_token))
            .route("/password", web::put().to(change_password)),
    );
}

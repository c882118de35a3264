//! JWT token handling
//!
//! Access, refresh and password-change tokens, each signed with its own key.
//! Tokens carry the account's rotating secret; checking it against the stored
//! account is left to [`AuthSystem`](crate::auth::AuthSystem).

mod handler;
pub mod types;


pub use types::{Claims, IssuedToken, JwtHandler, TokenPair, TokenType};

//! Authentication and authorization system
//!
//! Token issuance and verification, the login and password reset flows, and
//! the rule-based access evaluator.

pub mod access;
pub mod jwt;
pub mod system;


pub use access::{AccessContext, AccessControl, Action, Category, Principal, Subject};
pub use jwt::{IssuedToken, JwtHandler, TokenPair, TokenType};
pub use system::{AuthSession, AuthSystem};

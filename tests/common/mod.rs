//! Common test utilities for workforce-api
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{TestContext, fixtures, test_app};
//!
//! #[actix_web::test]
//! async fn my_test() {
//!     let ctx = TestContext::in_memory();
//!     let app = actix_web::test::init_service(test_app(ctx.state.clone())).await;
//!     // ...
//! }
//! ```

pub mod app;
pub mod database;
pub mod fixtures;

pub use app::{OutboxMailer, TestContext, test_app};
pub use database::TestDatabase;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}

//! Integration tests for workforce-api
//!
//! Every test drives the full actix application through `actix_web::test`.

pub mod auth_flow_tests;
pub mod database_tests;
pub mod user_api_tests;
pub mod worker_api_tests;

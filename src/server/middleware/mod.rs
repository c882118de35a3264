//! HTTP middleware

mod error_stack;

pub use error_stack::ErrorStack;

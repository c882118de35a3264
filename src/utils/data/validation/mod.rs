//! Input validation

mod data_validator;

pub use data_validator::{DataValidator, PASSWORD_SPECIAL_CHARS};

//! Data processing utilities

pub mod validation;

pub use validation::DataValidator;

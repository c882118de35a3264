//! Field validation for account and worker payloads

use crate::utils::error::{Result, ServiceError};
use regex::Regex;

/// Special characters accepted (and one of which is required) in passwords
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*";

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ServiceError::Internal(format!("Regex error: {}", e)))
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min {
        return Err(ServiceError::Validation(format!(
            "\"{}\" length must be at least {} characters long",
            field, min
        )));
    }
    if len > max {
        return Err(ServiceError::Validation(format!(
            "\"{}\" length must be less than or equal to {} characters long",
            field, max
        )));
    }
    Ok(())
}

/// Data validation utilities
pub struct DataValidator;

impl DataValidator {
    /// Validate an email address and return its stored (trimmed, lowercased) form
    pub fn normalize_email(field: &str, email: &str) -> Result<String> {
        let email = email.trim().to_lowercase();
        let email_regex = compile(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$")?;

        if email.len() > 254 || !email_regex.is_match(&email) {
            return Err(ServiceError::Validation(format!(
                "\"{}\" must be a valid email",
                field
            )));
        }

        Ok(email)
    }

    /// Validate a username, returning it trimmed
    pub fn validate_username(username: &str) -> Result<String> {
        let username = username.trim();
        check_length("username", username, 2, 30)?;

        let username_regex = compile(r"^\w+$")?;
        if !username_regex.is_match(username) {
            return Err(ServiceError::Validation(
                "\"username\" can only contain letters, digits and underscores".to_string(),
            ));
        }

        Ok(username.to_string())
    }

    /// Validate password strength, returning it trimmed
    pub fn validate_password(password: &str) -> Result<String> {
        let password = password.trim();
        check_length("password", password, 8, 20)?;

        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(ServiceError::Validation(
                "\"password\" missing lowercase letter".to_string(),
            ));
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(ServiceError::Validation(
                "\"password\" missing uppercase letter".to_string(),
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(ServiceError::Validation(
                "\"password\" missing digits".to_string(),
            ));
        }
        if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
            return Err(ServiceError::Validation(
                "\"password\" missing special symbols".to_string(),
            ));
        }

        Ok(password.to_string())
    }

    /// Validate a worker's full name, returning it trimmed
    pub fn validate_fullname(fullname: &str) -> Result<String> {
        let fullname = fullname.trim();
        check_length("fullname", fullname, 2, 40)?;

        let fullname_regex = compile(r"^[a-zA-Z. ]*$")?;
        if !fullname_regex.is_match(fullname) {
            return Err(ServiceError::Validation(
                "\"fullname\" can only contain latin letters, dots and spaces".to_string(),
            ));
        }

        Ok(fullname.to_string())
    }

    /// Validate a worker's position, returning it trimmed
    pub fn validate_position(position: &str) -> Result<String> {
        let position = position.trim();
        check_length("position", position, 2, 40)?;
        Ok(position.to_string())
    }

    /// Validate a salary and round it to cents
    pub fn validate_salary(salary: f64) -> Result<f64> {
        if !salary.is_finite() {
            return Err(ServiceError::Validation(
                "\"salary\" must be a number".to_string(),
            ));
        }
        if salary < 0.0 {
            return Err(ServiceError::Validation(
                "\"salary\" must be larger than or equal to 0".to_string(),
            ));
        }

        Ok((salary * 100.0).round() / 100.0)
    }

    /// Validate a mobile number in `+<country code><number>` form
    pub fn validate_mobile_number(number: &str) -> Result<String> {
        let number = number.trim();
        let mobile_regex = compile(r"^\+\d{1,3}\d{8,9}$")?;

        if !mobile_regex.is_match(number) {
            return Err(ServiceError::Validation(format!(
                "The number {} is not in a format \"+CC0123456789\"",
                number
            )));
        }

        Ok(number.to_string())
    }

    /// Validate a free-text search filter
    pub fn validate_search_text(field: &str, value: &str, max: usize) -> Result<String> {
        let value = value.trim();
        check_length(field, value, 0, max)?;
        Ok(value.to_string())
    }
}

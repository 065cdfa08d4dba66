use std::sync::LazyLock;

use regex::Regex;

use crate::error::AppError;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").expect("name pattern is valid"));
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7,15}$").expect("phone pattern is valid"));
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern is valid"));

/// Name must be non-empty and contain only ASCII letters and spaces
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Phone must be 7-15 ASCII digits and nothing else
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Email must look like `local@domain.tld`; deliberately permissive
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

// Validate input helper functions

/// Validates name input
pub fn validate_input_name(name: &str) -> Result<(), AppError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Invalid name. Please use only letters and spaces.".to_string(),
        ))
    }
}

/// Validates phone input
pub fn validate_input_phone(phone: &str) -> Result<(), AppError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Invalid phone number. Must contain 7-15 digits.".to_string(),
        ))
    }
}

/// Validates email input
pub fn validate_input_email(email: &str) -> Result<(), AppError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(AppError::Validation("Invalid email address format.".to_string()))
    }
}

//! Input Validation
//!
//! Field rules shared by the request types. Lengths are counted in
//! characters, not bytes, so multi-byte names are measured the way users
//! see them.

use crate::backend::error::BackendError;

/// Require `value` to hold between `min` and `max` characters (inclusive)
pub fn length_between(field: &str, value: &str, min: usize, max: usize) -> Result<(), BackendError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(BackendError::validation(
            field,
            format!("must be between {min} and {max} characters"),
        ));
    }
    Ok(())
}

/// Require `value` to hold at most `max` characters
pub fn max_length(field: &str, value: &str, max: usize) -> Result<(), BackendError> {
    if value.chars().count() > max {
        return Err(BackendError::validation(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

/// Require a non-blank value
pub fn required(field: &str, value: &str) -> Result<(), BackendError> {
    if value.trim().is_empty() {
        return Err(BackendError::validation(field, "is required"));
    }
    Ok(())
}

/// Check the `local@domain.tld` shape
///
/// This is a sanity check, not RFC 5322 parsing.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate an email field
pub fn email(field: &str, value: &str) -> Result<(), BackendError> {
    if !is_valid_email(value) {
        return Err(BackendError::validation(field, "must be a valid email address"));
    }
    Ok(())
}

//! Identity validation utilities

use thiserror::Error;

/// Errors that can occur during identity validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IdentityValidationError {
    #[error("Login cannot be empty")]
    EmptyLogin,

    #[error("Login exceeds maximum length of {0} characters")]
    LoginTooLong(usize),

    #[error("Login cannot contain whitespace")]
    LoginContainsWhitespace,

    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),

    #[error("Password exceeds maximum length of {0} characters")]
    PasswordTooLong(usize),
}

const MAX_LOGIN_LENGTH: usize = 150;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

/// Validate a login key
///
/// Rules:
/// - Cannot be empty
/// - Maximum 150 characters
/// - No whitespace
pub fn validate_login(login: &str) -> Result<(), IdentityValidationError> {
    if login.is_empty() {
        return Err(IdentityValidationError::EmptyLogin);
    }

    if login.len() > MAX_LOGIN_LENGTH {
        return Err(IdentityValidationError::LoginTooLong(MAX_LOGIN_LENGTH));
    }

    if login.chars().any(char::is_whitespace) {
        return Err(IdentityValidationError::LoginContainsWhitespace);
    }

    Ok(())
}

/// Validate a password
///
/// Rules:
/// - Minimum 8 characters
/// - Maximum 128 characters
pub fn validate_password(password: &str) -> Result<(), IdentityValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(IdentityValidationError::PasswordTooShort(
            MIN_PASSWORD_LENGTH,
        ));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(IdentityValidationError::PasswordTooLong(MAX_PASSWORD_LENGTH));
    }

    Ok(())
}

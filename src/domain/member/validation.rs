//! Member validation utilities

use thiserror::Error;

/// Errors that can occur during member validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MemberValidationError {
    #[error("Age must be a positive integer")]
    NonPositiveAge,

    #[error("Membership type cannot be empty")]
    EmptyMembershipType,
}

/// Validate a member's age
pub fn validate_age(age: i32) -> Result<(), MemberValidationError> {
    if age <= 0 {
        return Err(MemberValidationError::NonPositiveAge);
    }

    Ok(())
}

/// Validate a membership type label
pub fn validate_membership_type(membership_type: &str) -> Result<(), MemberValidationError> {
    if membership_type.trim().is_empty() {
        return Err(MemberValidationError::EmptyMembershipType);
    }

    Ok(())
}

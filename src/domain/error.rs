use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Duplicate: {message}")]
    Duplicate { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::Duplicate {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Check whether the error is caused by bad client input rather than a
    /// server-side fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Validation { .. }
                | Self::Duplicate { .. }
                | Self::Credential { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::not_found("Member 'alice' not found");
        assert_eq!(err.to_string(), "Not found: Member 'alice' not found");

        let err = DomainError::duplicate("Login 'alice' already exists");
        assert_eq!(err.to_string(), "Duplicate: Login 'alice' already exists");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(DomainError::validation("bad age").is_client_error());
        assert!(DomainError::duplicate("taken").is_client_error());
        assert!(DomainError::not_found("missing").is_client_error());
        assert!(DomainError::credential("wrong password").is_client_error());
        assert!(!DomainError::storage("connection reset").is_client_error());
        assert!(!DomainError::internal("panic").is_client_error());
    }
}

//! Identity service for account creation and authentication

use std::sync::Arc;

use crate::domain::identity::{
    validate_login, validate_password, Identity, IdentityRepository,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for creating a new identity
///
/// Web registrations pass the email as both `login` and `email`; the admin
/// console leaves `email` and the names empty.
#[derive(Debug, Clone, Default)]
pub struct CreateIdentityRequest {
    pub login: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Identity service for account management and credential checks
#[derive(Debug)]
pub struct IdentityService {
    repository: Arc<dyn IdentityRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl IdentityService {
    /// Create a new identity service
    pub fn new(repository: Arc<dyn IdentityRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Create a new identity; the plaintext credential is hashed and never
    /// stored
    pub async fn create(&self, request: CreateIdentityRequest) -> Result<Identity, DomainError> {
        validate_login(&request.login).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password).map_err(|e| DomainError::validation(e.to_string()))?;

        if self.repository.login_exists(&request.login).await? {
            return Err(DomainError::duplicate(format!(
                "Login '{}' already exists",
                request.login
            )));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let mut identity = Identity::new(request.login, password_hash);
        identity.set_email(request.email);
        identity.set_name(request.first_name, request.last_name);

        self.repository.create(identity).await
    }

    /// Authenticate with a login key and password
    ///
    /// Returns `Ok(None)` for an unknown login or a wrong password; callers
    /// cannot distinguish the two. Records the login timestamp on success.
    pub async fn authenticate(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<Identity>, DomainError> {
        let identity = match self.repository.get_by_login(login).await? {
            Some(identity) => identity,
            None => return Ok(None),
        };

        if !self.hasher.verify(password, identity.password_hash()) {
            return Ok(None);
        }

        self.repository.record_login(identity.login()).await?;

        // Re-fetch to pick up last_login_at
        self.repository.get_by_login(identity.login()).await
    }

    /// Get an identity by login key
    pub async fn get_by_login(&self, login: &str) -> Result<Option<Identity>, DomainError> {
        self.repository.get_by_login(login).await
    }

    /// Check if a login key is taken
    pub async fn login_exists(&self, login: &str) -> Result<bool, DomainError> {
        self.repository.login_exists(login).await
    }

    /// Delete an identity; cascades to its member profile at the storage
    /// layer
    pub async fn delete(&self, login: &str) -> Result<bool, DomainError> {
        self.repository.delete(login).await
    }
}

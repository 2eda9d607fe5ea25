//! Identity repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Identity;
use crate::domain::DomainError;

/// Repository trait for identity storage
///
/// Login uniqueness is a storage-layer guarantee: concurrent creates with
/// the same login key must yield exactly one success and one Duplicate
/// error.
#[async_trait]
pub trait IdentityRepository: Send + Sync + Debug {
    /// Get an identity by its login key
    async fn get_by_login(&self, login: &str) -> Result<Option<Identity>, DomainError>;

    /// Create a new identity
    async fn create(&self, identity: Identity) -> Result<Identity, DomainError>;

    /// Update an existing identity
    async fn update(&self, identity: &Identity) -> Result<Identity, DomainError>;

    /// Delete an identity; returns false when no such login exists.
    /// Deleting an identity cascades to its member profile at the storage
    /// layer.
    async fn delete(&self, login: &str) -> Result<bool, DomainError>;

    /// Check if a login key is taken
    async fn login_exists(&self, login: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_login(login).await?.is_some())
    }

    /// Record a login timestamp for an identity
    async fn record_login(&self, login: &str) -> Result<(), DomainError>;
}

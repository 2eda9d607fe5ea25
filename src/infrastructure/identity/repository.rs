//! In-memory identity repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::identity::{Identity, IdentityRepository};
use crate::domain::DomainError;

/// In-memory implementation of IdentityRepository
///
/// Used for local development and tests; the login key is the map key, so
/// uniqueness holds under the single write lock.
#[derive(Debug, Default)]
pub struct InMemoryIdentityRepository {
    identities: Arc<RwLock<HashMap<String, Identity>>>,
}

impl InMemoryIdentityRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn get_by_login(&self, login: &str) -> Result<Option<Identity>, DomainError> {
        let identities = self.identities.read().await;
        Ok(identities.get(login).cloned())
    }

    async fn create(&self, identity: Identity) -> Result<Identity, DomainError> {
        let mut identities = self.identities.write().await;
        let login = identity.login().to_string();

        if identities.contains_key(&login) {
            return Err(DomainError::duplicate(format!(
                "Login '{}' already exists",
                login
            )));
        }

        identities.insert(login, identity.clone());
        Ok(identity)
    }

    async fn update(&self, identity: &Identity) -> Result<Identity, DomainError> {
        let mut identities = self.identities.write().await;
        let login = identity.login().to_string();

        if !identities.contains_key(&login) {
            return Err(DomainError::not_found(format!(
                "Identity '{}' not found",
                login
            )));
        }

        identities.insert(login, identity.clone());
        Ok(identity.clone())
    }

    async fn delete(&self, login: &str) -> Result<bool, DomainError> {
        let mut identities = self.identities.write().await;
        Ok(identities.remove(login).is_some())
    }

    async fn record_login(&self, login: &str) -> Result<(), DomainError> {
        let mut identities = self.identities.write().await;

        if let Some(identity) = identities.get_mut(login) {
            identity.record_login();
            Ok(())
        } else {
            Err(DomainError::not_found(format!(
                "Identity '{}' not found",
                login
            )))
        }
    }
}

//! In-memory member repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::member::{Member, MemberRepository};
use crate::domain::DomainError;

/// In-memory implementation of MemberRepository
///
/// Backed by a Vec so `list` preserves insertion order, matching the serial
/// ordering of the Postgres table.
#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    members: Arc<RwLock<Vec<Member>>>,
}

impl InMemoryMemberRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn get(&self, login: &str) -> Result<Option<Member>, DomainError> {
        let members = self.members.read().await;
        Ok(members.iter().find(|m| m.login() == login).cloned())
    }

    async fn create(&self, member: Member) -> Result<Member, DomainError> {
        let mut members = self.members.write().await;

        if members.iter().any(|m| m.login() == member.login()) {
            return Err(DomainError::duplicate(format!(
                "Member '{}' already exists",
                member.login()
            )));
        }

        members.push(member.clone());
        Ok(member)
    }

    async fn update(&self, member: &Member) -> Result<Member, DomainError> {
        let mut members = self.members.write().await;

        match members.iter_mut().find(|m| m.login() == member.login()) {
            Some(slot) => {
                *slot = member.clone();
                Ok(member.clone())
            }
            None => Err(DomainError::not_found(format!(
                "Member '{}' not found",
                member.login()
            ))),
        }
    }

    async fn delete(&self, login: &str) -> Result<bool, DomainError> {
        let mut members = self.members.write().await;
        let before = members.len();
        members.retain(|m| m.login() != login);
        Ok(members.len() < before)
    }

    async fn list(&self) -> Result<Vec<Member>, DomainError> {
        let members = self.members.read().await;
        Ok(members.clone())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let members = self.members.read().await;
        Ok(members.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryMemberRepository::new();

        repo.create(Member::new("alice", 29, "monthly")).await.unwrap();

        let retrieved = repo.get("alice").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().age(), 29);
    }

    #[tokio::test]
    async fn test_duplicate_member() {
        let repo = InMemoryMemberRepository::new();

        repo.create(Member::new("alice", 29, "monthly")).await.unwrap();

        let result = repo.create(Member::new("alice", 40, "annual")).await;
        assert!(matches!(result, Err(DomainError::Duplicate { .. })));

        // The first profile is untouched
        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(repo.get("alice").await.unwrap().unwrap().age(), 29);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = InMemoryMemberRepository::new();
        let member = Member::new("ghost", 30, "monthly");

        let result = repo.update(&member).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryMemberRepository::new();

        repo.create(Member::new("alice", 29, "monthly")).await.unwrap();

        assert!(repo.delete("alice").await.unwrap());
        assert!(!repo.delete("alice").await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_create() {
        let repo = Arc::new(InMemoryMemberRepository::new());

        let first = tokio::spawn({
            let repo = repo.clone();
            async move { repo.create(Member::new("alice", 29, "monthly")).await }
        });
        let second = tokio::spawn({
            let repo = repo.clone();
            async move { repo.create(Member::new("alice", 30, "annual")).await }
        });

        let results = [first.await.unwrap(), second.await.unwrap()];

        // Exactly one create wins; the other sees Duplicate
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(DomainError::Duplicate { .. }))));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryMemberRepository::new();

        repo.create(Member::new("alice", 29, "monthly")).await.unwrap();
        repo.create(Member::new("bob", 35, "annual")).await.unwrap();
        repo.create(Member::new("carol", 41, "monthly")).await.unwrap();

        let logins: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|m| m.login().to_string())
            .collect();

        assert_eq!(logins, vec!["alice", "bob", "carol"]);
    }
}

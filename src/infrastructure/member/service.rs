//! Member service - the member-record lifecycle

use std::sync::Arc;

use crate::domain::identity::IdentityRepository;
use crate::domain::member::{
    validate_age, validate_membership_type, Member, MemberRepository,
};
use crate::domain::DomainError;

/// Member service coordinating member profiles with their backing
/// identities
#[derive(Debug)]
pub struct MemberService {
    members: Arc<dyn MemberRepository>,
    identities: Arc<dyn IdentityRepository>,
}

impl MemberService {
    /// Create a new member service
    pub fn new(members: Arc<dyn MemberRepository>, identities: Arc<dyn IdentityRepository>) -> Self {
        Self { members, identities }
    }

    /// Create a member profile for an existing identity
    ///
    /// The join date is assigned here, once, and never changes afterwards.
    pub async fn create(
        &self,
        login: &str,
        age: i32,
        membership_type: &str,
    ) -> Result<Member, DomainError> {
        validate_age(age).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_membership_type(membership_type)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if !self.identities.login_exists(login).await? {
            return Err(DomainError::not_found(format!(
                "No identity for login '{}'",
                login
            )));
        }

        self.members
            .create(Member::new(login, age, membership_type))
            .await
    }

    /// Find a member by the backing identity's login key
    pub async fn find_by_login(&self, login: &str) -> Result<Option<Member>, DomainError> {
        self.members.get(login).await
    }

    /// Partially update a member; `None` keeps the current value
    pub async fn update(
        &self,
        login: &str,
        age: Option<i32>,
        membership_type: Option<&str>,
    ) -> Result<Member, DomainError> {
        let mut member = self
            .members
            .get(login)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Member '{}' not found", login)))?;

        if let Some(age) = age {
            validate_age(age).map_err(|e| DomainError::validation(e.to_string()))?;
            member.set_age(age);
        }

        if let Some(membership_type) = membership_type {
            validate_membership_type(membership_type)
                .map_err(|e| DomainError::validation(e.to_string()))?;
            member.set_membership_type(membership_type);
        }

        self.members.update(&member).await
    }

    /// Delete a member and its backing identity
    ///
    /// NotFound when no such identity exists, with no mutation. The
    /// identity goes first: Postgres cascades the member row within that
    /// single statement, and the in-memory backend removes the member in
    /// the follow-up call, which is a no-op when the row is already gone.
    pub async fn delete(&self, login: &str) -> Result<(), DomainError> {
        if !self.identities.login_exists(login).await? {
            return Err(DomainError::not_found(format!(
                "Member '{}' not found",
                login
            )));
        }

        self.identities.delete(login).await?;
        self.members.delete(login).await?;

        Ok(())
    }

    /// List all members in insertion order
    pub async fn list(&self) -> Result<Vec<Member>, DomainError> {
        self.members.list().await
    }

    /// Count members
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.members.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::{Identity, IdentityRepository};
    use crate::infrastructure::identity::InMemoryIdentityRepository;
    use crate::infrastructure::member::InMemoryMemberRepository;
    use chrono::Utc;

    struct Fixture {
        service: MemberService,
        identities: Arc<InMemoryIdentityRepository>,
    }

    fn fixture() -> Fixture {
        let identities = Arc::new(InMemoryIdentityRepository::new());
        let members = Arc::new(InMemoryMemberRepository::new());
        Fixture {
            service: MemberService::new(members, identities.clone()),
            identities,
        }
    }

    async fn seed_identity(fixture: &Fixture, login: &str) {
        fixture
            .identities
            .create(Identity::new(login, "hashed"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let f = fixture();
        seed_identity(&f, "alice").await;

        f.service.create("alice", 29, "monthly").await.unwrap();

        let member = f.service.find_by_login("alice").await.unwrap().unwrap();
        assert_eq!(member.age(), 29);
        assert_eq!(member.membership_type(), "monthly");
        assert_eq!(member.join_date(), Utc::now().date_naive());
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_age() {
        let f = fixture();
        seed_identity(&f, "alice").await;

        let result = f.service.create("alice", 0, "monthly").await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));

        let result = f.service.create("alice", -3, "monthly").await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_requires_identity() {
        let f = fixture();

        let result = f.service.create("ghost", 29, "monthly").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_second_create_for_same_identity_fails() {
        let f = fixture();
        seed_identity(&f, "alice").await;

        f.service.create("alice", 29, "monthly").await.unwrap();

        let result = f.service.create("alice", 30, "annual").await;
        assert!(matches!(result, Err(DomainError::Duplicate { .. })));

        // Exactly one member remains, with the original fields
        assert_eq!(f.service.count().await.unwrap(), 1);
        let member = f.service.find_by_login("alice").await.unwrap().unwrap();
        assert_eq!(member.age(), 29);
        assert_eq!(member.membership_type(), "monthly");
    }

    #[tokio::test]
    async fn test_update_with_all_fields_omitted_is_a_no_op() {
        let f = fixture();
        seed_identity(&f, "alice").await;
        f.service.create("alice", 29, "monthly").await.unwrap();

        f.service.update("alice", None, None).await.unwrap();

        let member = f.service.find_by_login("alice").await.unwrap().unwrap();
        assert_eq!(member.age(), 29);
        assert_eq!(member.membership_type(), "monthly");
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let f = fixture();
        seed_identity(&f, "alice").await;
        f.service.create("alice", 29, "monthly").await.unwrap();
        let joined = f
            .service
            .find_by_login("alice")
            .await
            .unwrap()
            .unwrap()
            .join_date();

        f.service
            .update("alice", None, Some("annual"))
            .await
            .unwrap();

        let member = f.service.find_by_login("alice").await.unwrap().unwrap();
        assert_eq!(member.age(), 29);
        assert_eq!(member.membership_type(), "annual");
        assert_eq!(member.join_date(), joined);
    }

    #[tokio::test]
    async fn test_update_missing_member() {
        let f = fixture();

        let result = f.service.update("ghost", Some(30), None).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_removes_member_and_identity() {
        let f = fixture();
        seed_identity(&f, "alice").await;
        f.service.create("alice", 29, "monthly").await.unwrap();

        f.service.delete("alice").await.unwrap();

        assert!(f.service.find_by_login("alice").await.unwrap().is_none());
        assert!(f.identities.get_by_login("alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_not_found_without_mutation() {
        let f = fixture();
        seed_identity(&f, "alice").await;
        f.service.create("alice", 29, "monthly").await.unwrap();

        let result = f.service.delete("ghost").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        assert_eq!(f.service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_identity_without_profile() {
        let f = fixture();
        seed_identity(&f, "alice").await;

        f.service.delete("alice").await.unwrap();
        assert!(f.identities.get_by_login("alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_when_member_row_already_removed() {
        let identities = Arc::new(InMemoryIdentityRepository::new());
        let members = Arc::new(InMemoryMemberRepository::new());
        let service = MemberService::new(members.clone(), identities.clone());

        identities
            .create(Identity::new("alice", "hashed"))
            .await
            .unwrap();
        service.create("alice", 29, "monthly").await.unwrap();

        // Storage may have dropped the profile with the identity already
        members.delete("alice").await.unwrap();

        service.delete("alice").await.unwrap();
        assert!(identities.get_by_login("alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let f = fixture();
        for login in ["alice", "bob", "carol"] {
            seed_identity(&f, login).await;
        }

        f.service.create("alice", 29, "monthly").await.unwrap();
        f.service.create("bob", 35, "annual").await.unwrap();
        f.service.create("carol", 41, "monthly").await.unwrap();

        let logins: Vec<String> = f
            .service
            .list()
            .await
            .unwrap()
            .iter()
            .map(|m| m.login().to_string())
            .collect();

        assert_eq!(logins, vec!["alice", "bob", "carol"]);
    }

    // The full console scenario: add alice, edit with blank age and a new
    // membership type, then a cancelled delete leaves her intact.
    #[tokio::test]
    async fn test_alice_lifecycle() {
        let f = fixture();
        seed_identity(&f, "alice").await;

        f.service.create("alice", 29, "monthly").await.unwrap();

        // Edit: blank age (None), new membership type
        f.service
            .update("alice", None, Some("annual"))
            .await
            .unwrap();

        let member = f.service.find_by_login("alice").await.unwrap().unwrap();
        assert_eq!(member.age(), 29);
        assert_eq!(member.membership_type(), "annual");

        // A delete that is never confirmed performs no service call; the
        // record stays put
        assert_eq!(f.service.count().await.unwrap(), 1);
    }
}

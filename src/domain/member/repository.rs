//! Member repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Member;
use crate::domain::DomainError;

/// Repository trait for member storage
///
/// The 1:1 link to an identity is a storage-layer constraint: no two
/// members may share a login key, and deleting the backing identity removes
/// the member.
#[async_trait]
pub trait MemberRepository: Send + Sync + Debug {
    /// Get a member by the backing identity's login key
    async fn get(&self, login: &str) -> Result<Option<Member>, DomainError>;

    /// Create a new member; fails with Duplicate when the identity already
    /// has a profile
    async fn create(&self, member: Member) -> Result<Member, DomainError>;

    /// Update an existing member
    async fn update(&self, member: &Member) -> Result<Member, DomainError>;

    /// Delete a member; returns false when no profile exists
    async fn delete(&self, login: &str) -> Result<bool, DomainError>;

    /// List all members in insertion order
    async fn list(&self) -> Result<Vec<Member>, DomainError>;

    /// Count members
    async fn count(&self) -> Result<usize, DomainError>;
}

//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::identity::{
    Argon2Hasher, IdentityService, InMemoryIdentityRepository,
};
use crate::infrastructure::member::{InMemoryMemberRepository, MemberService};
use crate::infrastructure::session::{SessionConfig, SessionService};

/// Application state containing the shared services
#[derive(Clone)]
pub struct AppState {
    pub identity_service: Arc<IdentityService>,
    pub member_service: Arc<MemberService>,
    pub session_service: Arc<SessionService>,
}

impl AppState {
    /// Create state from already-constructed services
    pub fn new(
        identity_service: Arc<IdentityService>,
        member_service: Arc<MemberService>,
        session_service: Arc<SessionService>,
    ) -> Self {
        Self {
            identity_service,
            member_service,
            session_service,
        }
    }

    /// Create state backed by in-memory repositories
    ///
    /// Used when no `DATABASE_URL` is configured, and by tests.
    pub fn in_memory(session_config: SessionConfig) -> Self {
        let identities = Arc::new(InMemoryIdentityRepository::new());
        let members = Arc::new(InMemoryMemberRepository::new());
        let hasher = Arc::new(Argon2Hasher::new());

        Self {
            identity_service: Arc::new(IdentityService::new(identities.clone(), hasher)),
            member_service: Arc::new(MemberService::new(members, identities)),
            session_service: Arc::new(SessionService::new(session_config)),
        }
    }
}

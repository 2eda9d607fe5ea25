//! Domain layer - Core business logic and entities

pub mod error;
pub mod identity;
pub mod member;

pub use error::DomainError;
pub use identity::{
    validate_login, validate_password, Identity, IdentityRepository, IdentityValidationError,
};
pub use member::{
    validate_age, validate_membership_type, Member, MemberRepository, MemberValidationError,
};

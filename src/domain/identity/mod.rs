//! Identity domain
//!
//! An identity is an authenticatable account: a unique login key, a hashed
//! credential, and name fields. Web registrations use the email address as
//! the login key; the admin console may create identities with a bare
//! username.

mod entity;
mod repository;
mod validation;

pub use entity::Identity;
pub use repository::IdentityRepository;
pub use validation::{validate_login, validate_password, IdentityValidationError};

//! Identity infrastructure
//!
//! Implementations for account storage and authentication: Argon2 password
//! hashing, in-memory and Postgres repositories, and the identity service.

mod password;
mod postgres_repository;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres_repository::PostgresIdentityRepository;
pub use repository::InMemoryIdentityRepository;
pub use service::{CreateIdentityRequest, IdentityService};

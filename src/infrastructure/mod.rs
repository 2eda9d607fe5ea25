//! Infrastructure layer - Storage, hashing, and session implementations

pub mod identity;
pub mod logging;
pub mod member;
pub mod session;

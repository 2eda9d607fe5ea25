//! Member infrastructure
//!
//! In-memory and Postgres member repositories plus the member service used
//! by the admin console.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresMemberRepository;
pub use repository::InMemoryMemberRepository;
pub use service::MemberService;

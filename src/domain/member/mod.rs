//! Member domain
//!
//! A member is a gym-membership profile attached 1:1 to an identity: age,
//! membership type, and the date the member joined.

mod entity;
mod repository;
mod validation;

pub use entity::Member;
pub use repository::MemberRepository;
pub use validation::{validate_age, validate_membership_type, MemberValidationError};

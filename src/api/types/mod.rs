//! Shared API types
//!
//! All responses use the `{"message": ...}` wire format the frontend
//! expects.

pub mod body;
pub mod error;

pub use body::Payload;
pub use error::{ApiError, ApiErrorResponse};

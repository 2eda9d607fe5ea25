//! Request middleware and extractors

pub mod session;

pub use session::{
    clear_session_cookie, extract_session_token, session_cookie, RequireIdentity, SESSION_COOKIE,
};

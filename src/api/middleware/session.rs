//! Session cookie extraction
//!
//! The session is a signed token carried in an HttpOnly cookie. Handlers
//! that require an authenticated identity use the `RequireIdentity`
//! extractor, which redirects unauthenticated callers to the login page.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
    response::Redirect,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::domain::identity::Identity;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "gym_session";

/// Extractor that requires a valid session cookie
///
/// Rejection is a redirect to `/login/`, mirroring how the dashboard is
/// gated.
#[derive(Debug, Clone)]
pub struct RequireIdentity(pub Identity);

impl FromRequestParts<AppState> for RequireIdentity {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match authenticated_identity(&parts.headers, state).await {
            Some(identity) => Ok(RequireIdentity(identity)),
            None => Err(Redirect::to("/login/")),
        }
    }
}

/// Resolve the session cookie to a live identity, if any
pub async fn authenticated_identity(headers: &HeaderMap, state: &AppState) -> Option<Identity> {
    let token = extract_session_token(headers)?;

    debug!("Validating session token");

    let claims = state.session_service.validate(&token).ok()?;

    state
        .identity_service
        .get_by_login(claims.login())
        .await
        .ok()
        .flatten()
}

/// Extract the session token from the Cookie header
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    for pair in cookies.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=') {
            if name == SESSION_COOKIE && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

/// Build the Set-Cookie value that establishes a session
pub fn session_cookie(token: &str, expiration_hours: u64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        expiration_hours * 3600
    )
}

/// Build the Set-Cookie value that clears the session
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

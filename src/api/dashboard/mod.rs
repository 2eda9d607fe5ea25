//! Dashboard endpoint
//!
//! Read-only view of the authenticated identity. Unauthenticated callers
//! are redirected to the login page by the `RequireIdentity` extractor.

use axum::Json;
use serde::Serialize;

use crate::api::middleware::RequireIdentity;

/// Dashboard response: the identity's display name and email
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub name: String,
    pub email: String,
}

/// Render the authenticated identity's dashboard data
///
/// GET /dashboard/
pub async fn dashboard(RequireIdentity(identity): RequireIdentity) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        name: identity.full_name(),
        email: identity.email().to_string(),
    })
}

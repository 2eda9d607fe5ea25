//! Authentication API endpoints
//!
//! Registration, login, and logout. All three accept JSON or form-encoded
//! bodies and answer with `{message, ...}` JSON; login and registration
//! establish the session cookie on success.

use axum::{
    extract::State,
    http::header,
    response::{AppendHeaders, IntoResponse},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::middleware::{clear_session_cookie, session_cookie};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Payload};
use crate::domain::identity::Identity;
use crate::infrastructure::identity::CreateIdentityRequest;

/// Create the authentication router, nested under `/api`
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register/", post(register))
        .route("/login/", post(login))
        .route("/logout/", post(logout))
}

/// Registration request
///
/// The frontend posts camelCase JSON; form posts use snake_case. Fields
/// default to empty so missing values surface as validation messages, not
/// decode errors.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "firstName", alias = "first_name", default)]
    pub first_name: String,
    #[serde(rename = "lastName", alias = "last_name", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(rename = "confirmPassword", alias = "confirm_password", default)]
    pub confirm_password: String,
}

/// Login request; `email` and `username` are interchangeable
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful auth response with a redirect target
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub redirect: String,
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Register a new account
///
/// POST /api/register/
///
/// Validation short-circuits on the first failing check. On success the
/// email becomes the login key and a session is established. Registration
/// creates only an identity; member profiles are created by the admin
/// console.
pub async fn register(
    State(state): State<AppState>,
    Payload(request): Payload<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let first_name = request.first_name.trim();
    let last_name = request.last_name.trim();
    let email = request.email.trim().to_lowercase();

    if first_name.is_empty() || last_name.is_empty() {
        return Err(ApiError::bad_request(
            "First name and last name are required",
        ));
    }

    if email.is_empty() {
        return Err(ApiError::bad_request("Email is required"));
    }

    if request.password.is_empty() {
        return Err(ApiError::bad_request("Password is required"));
    }

    if request.password != request.confirm_password {
        return Err(ApiError::bad_request("Passwords do not match"));
    }

    if request.password.len() < 8 {
        return Err(ApiError::bad_request(
            "Password must be at least 8 characters long",
        ));
    }

    if state.identity_service.login_exists(&email).await? {
        return Err(ApiError::bad_request(
            "Email already registered. Please login instead.",
        ));
    }

    let identity = state
        .identity_service
        .create(CreateIdentityRequest {
            login: email.clone(),
            email,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            password: request.password,
        })
        .await?;

    info!(login = identity.login(), "identity registered");

    let cookie = establish_session(&state, &identity)?;

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(AuthResponse {
            message: "Registration successful! Redirecting to dashboard...".to_string(),
            redirect: "/dashboard/".to_string(),
        }),
    ))
}

/// Log in with email (or username) and password
///
/// POST /api/login/
pub async fn login(
    State(state): State<AppState>,
    Payload(request): Payload<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let login_key = if request.email.trim().is_empty() {
        &request.username
    } else {
        &request.email
    };
    let login_key = login_key.trim().to_lowercase();

    if login_key.is_empty() || request.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let identity = state
        .identity_service
        .authenticate(&login_key, &request.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    info!(login = identity.login(), "identity logged in");

    let cookie = establish_session(&state, &identity)?;

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(AuthResponse {
            message: "Login successful".to_string(),
            redirect: "/dashboard/".to_string(),
        }),
    ))
}

/// Log out
///
/// POST /api/logout/
///
/// Clears the session cookie unconditionally; succeeds with or without an
/// existing session.
pub async fn logout() -> impl IntoResponse {
    (
        AppendHeaders([(header::SET_COOKIE, clear_session_cookie())]),
        Json(LogoutResponse {
            message: "You have been logged out successfully.".to_string(),
        }),
    )
}

fn establish_session(state: &AppState, identity: &Identity) -> Result<String, ApiError> {
    let token = state.session_service.issue(identity)?;
    Ok(session_cookie(
        &token,
        state.session_service.expiration_hours(),
    ))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::router::create_router_with_state;
    use crate::api::state::AppState;
    use crate::infrastructure::session::SessionConfig;

    fn state() -> AppState {
        AppState::in_memory(SessionConfig::new("test-secret", 24))
    }

    fn json_post(path: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn register_body() -> serde_json::Value {
        serde_json::json!({
            "firstName": "Alice",
            "lastName": "Smith",
            "email": "alice@example.com",
            "password": "secret123",
            "confirmPassword": "secret123",
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_register_success_sets_session_cookie() {
        let state = state();
        let app = create_router_with_state(state);

        let response = app
            .oneshot(json_post("/api/register/", register_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("gym_session="));

        let body = body_json(response).await;
        assert_eq!(body["redirect"], "/dashboard/");
    }

    #[tokio::test]
    async fn test_register_password_mismatch_creates_no_identity() {
        let state = state();
        let app = create_router_with_state(state.clone());

        let mut body = register_body();
        body["confirmPassword"] = "different".into();

        let response = app.oneshot(json_post("/api/register/", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Passwords do not match");

        assert!(!state
            .identity_service
            .login_exists("alice@example.com")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_register_validation_order() {
        let app = create_router_with_state(state());

        // Names missing wins over everything else
        let response = app
            .clone()
            .oneshot(json_post("/api/register/", serde_json::json!({})))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["message"], "First name and last name are required");

        // With names present, email missing is reported next
        let response = app
            .oneshot(json_post(
                "/api/register/",
                serde_json::json!({"firstName": "A", "lastName": "B"}),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["message"], "Email is required");
    }

    #[tokio::test]
    async fn test_register_short_password() {
        let app = create_router_with_state(state());

        let mut body = register_body();
        body["password"] = "short".into();
        body["confirmPassword"] = "short".into();

        let response = app.oneshot(json_post("/api/register/", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(
            body["message"],
            "Password must be at least 8 characters long"
        );
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let state = state();
        let app = create_router_with_state(state);

        let response = app
            .clone()
            .oneshot(json_post("/api/register/", register_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(json_post("/api/register/", register_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Email already registered. Please login instead.");
    }

    #[tokio::test]
    async fn test_register_accepts_form_encoded() {
        let app = create_router_with_state(state());

        let request = Request::builder()
            .method("POST")
            .uri("/api/register/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(
                "first_name=Alice&last_name=Smith&email=alice@example.com\
                 &password=secret123&confirm_password=secret123",
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_malformed_json() {
        let app = create_router_with_state(state());

        let request = Request::builder()
            .method("POST")
            .uri("/api/register/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{broken"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid JSON data");
    }

    #[tokio::test]
    async fn test_login_success() {
        let app = create_router_with_state(state());

        app.clone()
            .oneshot(json_post("/api/register/", register_body()))
            .await
            .unwrap();

        let response = app
            .oneshot(json_post(
                "/api/login/",
                serde_json::json!({"email": "alice@example.com", "password": "secret123"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::SET_COOKIE));

        let body = body_json(response).await;
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["redirect"], "/dashboard/");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let app = create_router_with_state(state());

        app.clone()
            .oneshot(json_post("/api/register/", register_body()))
            .await
            .unwrap();

        let response = app
            .oneshot(json_post(
                "/api/login/",
                serde_json::json!({"email": "alice@example.com", "password": "wrong-password"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let app = create_router_with_state(state());

        let response = app
            .oneshot(json_post(
                "/api/login/",
                serde_json::json!({"email": "alice@example.com"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Email and password are required");
    }

    #[tokio::test]
    async fn test_login_accepts_username_field() {
        let app = create_router_with_state(state());

        app.clone()
            .oneshot(json_post("/api/register/", register_body()))
            .await
            .unwrap();

        let response = app
            .oneshot(json_post(
                "/api/login/",
                serde_json::json!({"username": "alice@example.com", "password": "secret123"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_logout_without_session_still_succeeds() {
        let app = create_router_with_state(state());

        let request = Request::builder()
            .method("POST")
            .uri("/api/logout/")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(cookie.contains("Max-Age=0"));
    }
}

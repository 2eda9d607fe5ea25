//! Request body extractor accepting JSON or form-encoded payloads
//!
//! The frontend posts JSON; plain HTML forms post urlencoded bodies. Both
//! decode into the same request structs. Decode failures are reported as a
//! 400 distinct from field validation errors.

use axum::{
    extract::{Form, FromRequest, Request},
    http::header::CONTENT_TYPE,
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extractor that decodes `application/json` or
/// `application/x-www-form-urlencoded` bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if content_type.starts_with("application/json") {
            match AxumJson::<T>::from_request(req, state).await {
                Ok(AxumJson(value)) => Ok(Payload(value)),
                Err(_) => Err(ApiError::bad_request("Invalid JSON data")),
            }
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            match Form::<T>::from_request(req, state).await {
                Ok(Form(value)) => Ok(Payload(value)),
                Err(_) => Err(ApiError::bad_request("Invalid form data")),
            }
        } else {
            Err(ApiError::bad_request(
                "Unsupported content type. Expected 'application/json' or 'application/x-www-form-urlencoded'",
            ))
        }
    }
}

//! Request extractors with envelope-formatted rejections
//!
//! axum's own `Json` and `Path` rejections answer in plain text with their
//! own status codes. These wrappers answer like every other route instead:
//! malformed bodies are 400, unparsable path ids are 404.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::app_error::AppError;

/// Message used for unmatched routes and unparsable path ids
pub const RESOURCE_NOT_FOUND: &str = "Resource Not Found";

/// JSON request body, parsed regardless of `Content-Type`
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::bad_request("Malformed request body"))?;
        let value = serde_json::from_slice::<Value>(&bytes)?;
        Ok(Self(value))
    }
}

/// Path parameters; parse failures read as a missing resource
#[derive(Debug, Clone, Copy)]
pub struct ResourcePath<T>(pub T);

impl<S, T> FromRequestParts<S> for ResourcePath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|_| AppError::not_found(RESOURCE_NOT_FOUND))
    }
}

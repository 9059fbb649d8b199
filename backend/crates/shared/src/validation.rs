//! Request body validation helpers
//!
//! Handlers receive bodies as loose JSON objects and pull fields out one by
//! one, so every route reports missing and empty values the same way.

use serde_json::Value;

use crate::error::app_error::{AppError, AppResult};

/// Get a field that must be present and non-null
///
/// ## Errors
/// 400 `Request must contain '<field>' data`
pub fn extract_required_field<'a>(body: &'a Value, field: &str) -> AppResult<&'a Value> {
    match body.get(field) {
        Some(Value::Null) | None => Err(AppError::bad_request(format!(
            "Request must contain '{field}' data"
        ))),
        Some(value) => Ok(value),
    }
}

/// Reject empty or whitespace-only text
///
/// ## Errors
/// 400 `'<field>' cannot be empty`
pub fn reject_if_empty<'a>(field: &str, value: &'a str) -> AppResult<&'a str> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(format!("'{field}' cannot be empty")));
    }
    Ok(value)
}

/// Required, non-empty string field
pub fn required_text(body: &Value, field: &str) -> AppResult<String> {
    let value = extract_required_field(body, field)?;
    let text = as_text(field, value)?;
    reject_if_empty(field, text).map(str::to_owned)
}

/// Optional string field; present-but-empty is still rejected
pub fn optional_text(body: &Value, field: &str) -> AppResult<Option<String>> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let text = as_text(field, value)?;
            reject_if_empty(field, text).map(|t| Some(t.to_owned()))
        }
    }
}

/// Optional boolean field
pub fn optional_bool(body: &Value, field: &str) -> AppResult<Option<bool>> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(AppError::bad_request(format!(
            "'{field}' must be true or false"
        ))),
    }
}

fn as_text<'a>(field: &str, value: &'a Value) -> AppResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| AppError::bad_request(format!("'{field}' must be a string")))
}

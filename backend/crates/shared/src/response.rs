//! Status-coded response envelope
//!
//! Every message-only response (errors, deletions, empty listings) has the
//! same shape:
//!
//! ```json
//! { "status_code": "404: Not Found, Question with id:9 does not exist" }
//! ```
//!
//! with the same string mirrored in a `Status-Code` header. Errors that carry
//! a remediation hint add an `action` field next to `status_code`.
//! Non-ASCII characters are escaped in the header (`\u{8cea}`) and kept
//! verbatim in the body.

use axum::Json;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::app_error::AppError;

/// Header mirroring the `status_code` body field
pub const STATUS_CODE_HEADER: HeaderName = HeaderName::from_static("status-code");

#[derive(Debug, Serialize)]
struct StatusBody<'a> {
    status_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<&'a str>,
}

/// Build a message response: `"<code>: <label>, <message>"`
pub fn build_status_response(code: StatusCode, label: &str, message: &str) -> Response {
    let line = format!("{}: {}, {}", code.as_u16(), label, message);
    status_line_response(code, line, None)
}

/// Render an [`AppError`] in the envelope format
pub fn error_response(err: &AppError) -> Response {
    let code = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    status_line_response(code, err.status_line(), err.action())
}

/// Listing helper: a JSON array, or an `OK` message when there is nothing to list
pub fn check_for_content<T: Serialize>(items: Vec<T>, no_content_message: &str) -> Response {
    if items.is_empty() {
        return build_status_response(StatusCode::OK, "OK", no_content_message);
    }
    (StatusCode::OK, Json(items)).into_response()
}

fn status_line_response(code: StatusCode, line: String, action: Option<&str>) -> Response {
    let header = header_safe(&line);
    let body = StatusBody {
        status_code: line,
        action,
    };
    let mut response = (code, Json(body)).into_response();
    if let Ok(value) = HeaderValue::from_str(&header) {
        response.headers_mut().insert(STATUS_CODE_HEADER, value);
    }
    response
}

/// Escape everything outside visible ASCII so the line always fits a header
fn header_safe(line: &str) -> String {
    line.chars()
        .map(|c| match c {
            ' ' | '!'..='~' => c.to_string(),
            _ => c.escape_unicode().to_string(),
        })
        .collect()
}

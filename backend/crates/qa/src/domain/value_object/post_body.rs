//! Post Body Value Object
//!
//! Text of a question or an answer, paired with the canonical key used for
//! duplicate detection.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};
use platform::text::{canonical_key, normalize_display};

/// Maximum length of a question or answer, in characters
pub const POST_BODY_MAX_LENGTH: usize = 1000;

#[derive(Clone, PartialEq, Eq)]
pub struct PostBody {
    text: String,
    canonical: String,
}

impl PostBody {
    /// Validate user input; `field` names the request field in messages
    pub fn new(field: &str, input: &str) -> AppResult<Self> {
        let text = normalize_display(input);
        if text.is_empty() {
            return Err(AppError::bad_request(format!("'{field}' cannot be empty")));
        }

        let length = text.chars().count();
        if length > POST_BODY_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "'{field}' must be at most {POST_BODY_MAX_LENGTH} characters (got {length})"
            )));
        }

        let canonical = canonical_key(&text);
        Ok(Self { text, canonical })
    }

    /// Rebuild from a stored row
    pub fn from_db(text: impl Into<String>) -> Self {
        let text = text.into();
        let canonical = canonical_key(&text);
        Self { text, canonical }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Same post modulo case, whitespace and compatibility forms
    pub fn is_duplicate_of(&self, other: &PostBody) -> bool {
        self.canonical == other.canonical
    }
}

impl fmt::Debug for PostBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PostBody").field(&self.text).finish()
    }
}

//! User Name Value Object
//!
//! ユーザー名はログインと表示に使う公開ハンドル。
//!
//! ## 設計方針
//! - ASCII文字のみ許可（a-z, 0-9, _ . - +）
//! - 大文字入力は受け付けるが、canonical（正規形）は小文字
//! - NFKC正規化 → 小文字化 → 検証 の順で処理
//!
//! ## 不変条件
//! - 長さ: 3〜30文字（正規化後）
//! - 先頭・末尾: 英数字または `_`
//! - 連続ドット禁止（`..`）
//! - 英数字を最低1文字含む
//! - `@` を含まない（ログイン時にメールアドレスと区別するため）

use std::fmt;

use kernel::error::app_error::AppError;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

pub const USER_NAME_MIN_LENGTH: usize = 3;
pub const USER_NAME_MAX_LENGTH: usize = 30;

const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-', '+'];

/// Names that collide with routes or read as official accounts
const RESERVED_WORDS: &[&str] = &[
    "admin",
    "administrator",
    "root",
    "system",
    "moderator",
    "support",
    "api",
    "auth",
    "login",
    "logout",
    "signup",
    "question",
    "questions",
    "answer",
    "answers",
    "null",
    "undefined",
    "anonymous",
    "me",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username is too short ({length} chars, minimum {min})")]
    TooShort { length: usize, min: usize },

    #[error("Username is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    #[error("Invalid character '{ch}' in username. Only a-z, 0-9, _, ., -, + are allowed")]
    InvalidCharacter { ch: char },

    #[error("Username must start and end with a letter, digit or '_'")]
    InvalidBoundary,

    #[error("Username cannot contain consecutive dots (..)")]
    ConsecutiveDots,

    #[error("Username must contain at least one letter or digit")]
    NoAlphanumeric,

    #[error("'{0}' is a reserved username")]
    Reserved(String),
}

impl From<UserNameError> for AppError {
    fn from(err: UserNameError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

/// Validated user name
///
/// `original` keeps the caller's casing for display; `canonical` is the
/// lowercase form that carries the unique index.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let original = input.as_ref().nfkc().collect::<String>().trim().to_string();
        let canonical = original.to_lowercase();
        validate(&canonical)?;
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Rebuild from a stored row (already validated on the way in)
    pub fn from_db(original: impl Into<String>) -> Self {
        let original = original.into();
        let canonical = original.to_lowercase();
        Self {
            original,
            canonical,
        }
    }

    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

fn validate(canonical: &str) -> Result<(), UserNameError> {
    let (Some(first), Some(last)) = (canonical.chars().next(), canonical.chars().next_back())
    else {
        return Err(UserNameError::Empty);
    };

    let length = canonical.chars().count();
    if length < USER_NAME_MIN_LENGTH {
        return Err(UserNameError::TooShort {
            length,
            min: USER_NAME_MIN_LENGTH,
        });
    }
    if length > USER_NAME_MAX_LENGTH {
        return Err(UserNameError::TooLong {
            length,
            max: USER_NAME_MAX_LENGTH,
        });
    }

    if let Some(ch) = canonical.chars().find(|&c| !is_valid_char(c)) {
        return Err(UserNameError::InvalidCharacter { ch });
    }

    if !is_valid_boundary_char(first) || !is_valid_boundary_char(last) {
        return Err(UserNameError::InvalidBoundary);
    }

    if canonical.contains("..") {
        return Err(UserNameError::ConsecutiveDots);
    }

    if !canonical.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(UserNameError::NoAlphanumeric);
    }

    if RESERVED_WORDS.contains(&canonical) {
        return Err(UserNameError::Reserved(canonical.to_string()));
    }

    Ok(())
}

#[inline]
fn is_valid_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || ALLOWED_SPECIAL_CHARS.contains(&c)
}

#[inline]
fn is_valid_boundary_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.original).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_lowercase() {
        let name = UserName::new("  Ada_Lovelace ").unwrap();
        assert_eq!(name.original(), "Ada_Lovelace");
        assert_eq!(name.canonical(), "ada_lovelace");
    }

    #[test]
    fn test_nfkc_normalization() {
        // Full-width letters fold to ASCII
        let name = UserName::new("Ａｄａ").unwrap();
        assert_eq!(name.canonical(), "ada");
    }

    #[test]
    fn test_length_limits() {
        assert!(matches!(UserName::new("   "), Err(UserNameError::Empty)));
        assert!(matches!(
            UserName::new("ab"),
            Err(UserNameError::TooShort { length: 2, min: 3 })
        ));
        assert!(matches!(
            UserName::new("a".repeat(31)),
            Err(UserNameError::TooLong { length: 31, max: 30 })
        ));
        assert!(UserName::new("a".repeat(30)).is_ok());
    }

    #[test]
    fn test_character_rules() {
        assert!(matches!(
            UserName::new("ada@home"),
            Err(UserNameError::InvalidCharacter { ch: '@' })
        ));
        assert!(matches!(
            UserName::new("ada lovelace"),
            Err(UserNameError::InvalidCharacter { ch: ' ' })
        ));
        assert!(matches!(
            UserName::new(".ada"),
            Err(UserNameError::InvalidBoundary)
        ));
        assert!(matches!(
            UserName::new("ada-"),
            Err(UserNameError::InvalidBoundary)
        ));
        assert!(matches!(
            UserName::new("ada..l"),
            Err(UserNameError::ConsecutiveDots)
        ));
        assert!(matches!(
            UserName::new("___"),
            Err(UserNameError::NoAlphanumeric)
        ));
        assert!(UserName::new("ada.l-o+v_e").is_ok());
    }

    #[test]
    fn test_reserved() {
        assert!(matches!(
            UserName::new("Admin"),
            Err(UserNameError::Reserved(word)) if word == "admin"
        ));
    }

    #[test]
    fn test_error_maps_to_bad_request() {
        let err: AppError = UserNameError::Empty.into();
        assert_eq!(err.status_code(), 400);
    }
}

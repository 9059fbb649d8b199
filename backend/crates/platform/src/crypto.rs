//! Secret material helpers

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};
use thiserror::Error;

/// Minimum accepted length for signing secrets, in bytes
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("secret must be at least {min} bytes (got {actual})")]
    TooShort { min: usize, actual: usize },
}

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Fresh random signing secret (development and test profiles)
pub fn random_secret() -> Vec<u8> {
    random_bytes(MIN_SECRET_LEN)
}

/// Decode a base64 signing secret from configuration
pub fn decode_secret(encoded: &str) -> Result<Vec<u8>, SecretError> {
    let bytes = general_purpose::STANDARD.decode(encoded.trim())?;
    if bytes.len() < MIN_SECRET_LEN {
        return Err(SecretError::TooShort {
            min: MIN_SECRET_LEN,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        assert!(bytes.iter().any(|&b| b != 0));
        assert_eq!(random_bytes(0).len(), 0);
    }

    #[test]
    fn test_decode_secret() {
        let encoded = general_purpose::STANDARD.encode([7u8; 32]);
        assert_eq!(decode_secret(&encoded).unwrap(), vec![7u8; 32]);
        assert_eq!(decode_secret(&format!(" {encoded}\n")).unwrap().len(), 32);
    }

    #[test]
    fn test_decode_secret_rejects_short_and_garbage() {
        let short = general_purpose::STANDARD.encode([1u8; 8]);
        assert!(matches!(
            decode_secret(&short),
            Err(SecretError::TooShort { min: 32, actual: 8 })
        ));
        assert!(matches!(decode_secret("%%%"), Err(SecretError::Encoding(_))));
    }
}

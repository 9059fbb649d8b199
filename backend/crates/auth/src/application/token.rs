//! Access Tokens
//!
//! HS256 JWTs carrying the user id in `sub`. Signature and expiry checks
//! are left to `jsonwebtoken`.

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a decimal string
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Issues and verifies access tokens
pub struct AccessTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl AccessTokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(&config.token_secret),
            decoding_key: DecodingKey::from_secret(&config.token_secret),
            validation,
            ttl_secs: config.token_ttl_secs(),
        }
    }

    pub fn issue(&self, user_id: UserId) -> AuthResult<IssuedToken> {
        self.issue_at(user_id, Utc::now())
    }

    fn issue_at(&self, user_id: UserId, now: DateTime<Utc>) -> AuthResult<IssuedToken> {
        let iat = now.timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat,
            exp: iat.saturating_add(self.ttl_secs),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(AuthError::TokenIssue)?;

        Ok(IssuedToken {
            token,
            expires_in: self.ttl_secs,
        })
    }

    /// Verify a token and return the user it was issued to
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                JwtErrorKind::ExpiredSignature => AuthError::TokenExpired,
                JwtErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::InvalidToken,
            }
        })?;

        data.claims
            .sub
            .parse::<UserId>()
            .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn service(secret: &[u8]) -> AccessTokenService {
        AccessTokenService::new(&AuthConfig::new(secret.to_vec(), Duration::from_secs(60)))
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = service(&[1u8; 32]);
        let issued = tokens.issue(UserId::from_raw(42)).unwrap();
        assert_eq!(issued.expires_in, 60);
        assert_eq!(tokens.verify(&issued.token).unwrap(), UserId::from_raw(42));
    }

    #[test]
    fn test_wrong_secret_fails_signature() {
        let issued = service(&[1u8; 32]).issue(UserId::from_raw(1)).unwrap();
        assert!(matches!(
            service(&[2u8; 32]).verify(&issued.token),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_expired_token() {
        let tokens = service(&[1u8; 32]);
        let an_hour_ago = Utc::now() - chrono::Duration::hours(1);
        let issued = tokens.issue_at(UserId::from_raw(1), an_hour_ago).unwrap();
        assert!(matches!(
            tokens.verify(&issued.token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_garbage_token() {
        let tokens = service(&[1u8; 32]);
        assert!(matches!(tokens.verify("not.a.jwt"), Err(AuthError::InvalidToken)));
        assert!(matches!(tokens.verify(""), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_non_numeric_subject_is_rejected() {
        let secret = [1u8; 32];
        let claims = Claims {
            sub: "alice".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 60,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&secret),
        )
        .unwrap();
        assert!(matches!(
            service(&secret).verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }
}

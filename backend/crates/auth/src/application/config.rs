//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

/// Default access token lifetime (1 hour)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret (at least 32 bytes)
    pub token_secret: Vec<u8>,
    /// Access token lifetime
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(token_secret: Vec<u8>, token_ttl: Duration) -> Self {
        Self {
            token_secret,
            token_ttl,
        }
    }

    /// Random per-process secret; tokens do not survive a restart
    pub fn development() -> Self {
        Self::new(platform::crypto::random_secret(), DEFAULT_TOKEN_TTL)
    }

    /// Token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

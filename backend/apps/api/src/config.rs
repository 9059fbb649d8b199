//! Environment Configuration
//!
//! `APP_SETTINGS` picks a profile; the remaining variables refine it.
//!
//! | Variable           | Default                                        |
//! |--------------------|------------------------------------------------|
//! | `APP_SETTINGS`     | `development`                                  |
//! | `DATABASE_URL`     | unset (in-memory storage outside production)   |
//! | `DATABASE_NAME`    | profile default                                |
//! | `LISTEN_ADDR`      | `0.0.0.0:5000`                                 |
//! | `TOKEN_SECRET`     | random per process (required in production)   |
//! | `TOKEN_TTL_SECS`   | `3600`                                         |
//! | `FRONTEND_ORIGINS` | `http://localhost:3000,http://127.0.0.1:3000`  |

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::DEFAULT_TOKEN_TTL;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Deployment profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Testing,
    Production,
}

impl AppEnv {
    pub fn debug(self) -> bool {
        !matches!(self, AppEnv::Production)
    }

    pub fn testing(self) -> bool {
        matches!(self, AppEnv::Testing)
    }

    pub fn default_database(self) -> &'static str {
        match self {
            AppEnv::Development => "qa_development",
            AppEnv::Testing => "qa_testing",
            AppEnv::Production => "qa",
        }
    }
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnv::Development),
            "testing" | "test" => Ok(AppEnv::Testing),
            "production" | "prod" => Ok(AppEnv::Production),
            other => bail!("Unknown APP_SETTINGS profile: {other}"),
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AppEnv::Development => "development",
            AppEnv::Testing => "testing",
            AppEnv::Production => "production",
        })
    }
}

/// Fully resolved server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub env: AppEnv,
    pub database_url: Option<String>,
    pub database_name: String,
    pub listen_addr: SocketAddr,
    pub auth: AuthConfig,
    /// `TOKEN_SECRET` was unset; tokens die with the process
    pub random_token_secret: bool,
    pub frontend_origins: Vec<String>,
}

impl ApiConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let env = match var("APP_SETTINGS") {
            Some(profile) => profile.parse()?,
            None => AppEnv::default(),
        };

        let database_url = var("DATABASE_URL");
        if database_url.is_none() && env == AppEnv::Production {
            bail!("DATABASE_URL must be set in production");
        }
        let database_name =
            var("DATABASE_NAME").unwrap_or_else(|| env.default_database().to_string());

        let listen_addr = var("LISTEN_ADDR")
            .as_deref()
            .unwrap_or(DEFAULT_LISTEN_ADDR)
            .parse()
            .context("LISTEN_ADDR must be a socket address like 0.0.0.0:5000")?;

        let token_ttl = match var("TOKEN_TTL_SECS") {
            Some(secs) => {
                let secs: u64 = secs
                    .trim()
                    .parse()
                    .context("TOKEN_TTL_SECS must be a whole number of seconds")?;
                if secs == 0 {
                    bail!("TOKEN_TTL_SECS must be positive");
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TOKEN_TTL,
        };

        let random_token_secret = var("TOKEN_SECRET").is_none();
        let auth = match var("TOKEN_SECRET") {
            Some(encoded) => {
                let secret = platform::crypto::decode_secret(&encoded)
                    .context("TOKEN_SECRET must be base64 of at least 32 bytes")?;
                AuthConfig::new(secret, token_ttl)
            }
            None if env == AppEnv::Production => {
                bail!("TOKEN_SECRET must be set in production");
            }
            None => AuthConfig {
                token_ttl,
                ..AuthConfig::development()
            },
        };

        let frontend_origins = var("FRONTEND_ORIGINS")
            .as_deref()
            .unwrap_or(DEFAULT_FRONTEND_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect();

        Ok(Self {
            env,
            database_url,
            database_name,
            listen_addr,
            auth,
            random_token_secret,
            frontend_origins,
        })
    }

    /// Default `RUST_LOG` directive for this profile
    pub fn default_log_filter(&self) -> &'static str {
        if self.env.debug() {
            "api=debug,auth=debug,qa=debug,tower_http=debug"
        } else {
            "api=info,auth=info,qa=info,tower_http=info"
        }
    }
}

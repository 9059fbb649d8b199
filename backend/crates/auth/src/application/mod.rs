//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod log_in;
pub mod profile;
pub mod sign_up;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use log_in::{LogInInput, LogInOutput, LogInUseCase};
pub use profile::ReadProfileUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use token::{AccessTokenService, Claims, IssuedToken};

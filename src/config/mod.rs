//! Client configuration and credentials.
//!
//! Settings come from `~/.config/brewlog/config.toml` (or an explicit
//! path), with defaults for anything missing. Credentials are the Basic-auth
//! login hash the API expects on authenticated requests.

mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_header, AuthHeader};
pub use credentials::{LoginHash, SecureString};
pub use loader::ConfigError;
pub use types::{Config, ServerConfig, SessionConfig, UiConfig};

//! Authentication header building for API requests.

use super::credentials::LoginHash;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the Basic-auth header for a stored login hash.
pub fn build_auth_header(hash: &LoginHash) -> AuthHeader {
    (
        "Authorization".to_string(),
        format!("Basic {}", hash.expose()),
    )
}

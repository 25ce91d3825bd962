//! Credential handling for the beer API.
//!
//! The API authenticates with HTTP Basic auth, so the client keeps the
//! Base64 `username:password` token (the "login hash") and replays it on
//! every authenticated request. That token is plaintext-equivalent; it is
//! wrapped so it never shows up in logs or Debug output.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Use sparingly and only when actually sending to the API or disk.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Base64 encoding of `username:password`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginHash(SecureString);

impl LoginHash {
    /// Encode a username/password pair.
    pub fn from_credentials(username: &str, password: &str) -> Self {
        let encoded = STANDARD.encode(format!("{username}:{password}"));
        Self(SecureString::new(encoded))
    }

    /// Wrap an already-encoded token, e.g. one read back from the session file.
    ///
    /// Returns `None` for an empty token.
    pub fn from_encoded(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return None;
        }
        Some(Self(SecureString::new(token)))
    }

    /// The encoded token.
    pub fn expose(&self) -> &str {
        self.0.expose()
    }

    /// Username portion of the token, if it decodes cleanly.
    pub fn username(&self) -> Option<String> {
        let bytes = STANDARD.decode(self.expose()).ok()?;
        let decoded = String::from_utf8(bytes).ok()?;
        decoded.split_once(':').map(|(user, _)| user.to_string())
    }
}

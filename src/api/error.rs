//! Error types for API calls.

use thiserror::Error;

/// Errors that can occur talking to the beer API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response (connect, timeout, TLS).
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server refused the request as invalid (HTTP 422): duplicate
    /// username, bad credentials.
    #[error("Request to '{endpoint}' rejected: {message}")]
    Rejected { endpoint: String, message: String },

    /// Any other non-success status.
    #[error("Unexpected status {status} from '{endpoint}'")]
    Status { endpoint: String, status: u16 },

    /// Response body was not the JSON we expected.
    #[error("Malformed response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be built (bad base URL).
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

impl ApiError {
    /// True for validation/auth failures the UI should surface as a banner.
    pub fn is_rejected(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }

    /// Short machine-readable tag for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "transport_error",
            ApiError::Rejected { .. } => "rejected",
            ApiError::Status { .. } => "unexpected_status",
            ApiError::Decode { .. } => "decode_error",
            ApiError::InvalidUrl { .. } => "invalid_url",
        }
    }
}

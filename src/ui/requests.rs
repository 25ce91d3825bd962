//! API requests issued by the app and their completions.
//!
//! The app never awaits anything itself. It hands out a [`Dispatch`]; the
//! caller executes it (inline in tests and one-shot commands, on a tokio
//! task in the terminal UI) and feeds the [`Completion`] back.

use crate::api::{ApiClient, ApiError, BeerList, NewUser, ReviewPayload, UserRecord};
use crate::config::LoginHash;

/// Request families. Each one has its own generation counter, so a newer
/// search only invalidates older searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Search,
    Auth,
    Review,
}

impl RequestKind {
    fn index(self) -> usize {
        match self {
            RequestKind::Search => 0,
            RequestKind::Auth => 1,
            RequestKind::Review => 2,
        }
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    pub kind: RequestKind,
    pub generation: u64,
}

/// Hands out monotonically increasing tokens per request kind.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: [u64; 3],
}

impl RequestTracker {
    pub fn issue(&mut self, kind: RequestKind) -> RequestToken {
        let slot = &mut self.latest[kind.index()];
        *slot += 1;
        RequestToken {
            kind,
            generation: *slot,
        }
    }

    /// Generation of the newest request of `kind`, 0 if none was issued.
    pub fn latest(&self, kind: RequestKind) -> u64 {
        self.latest[kind.index()]
    }

    /// True if no newer request of the same kind has been issued.
    pub fn is_current(&self, token: &RequestToken) -> bool {
        self.latest[token.kind.index()] == token.generation
    }
}

#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Fetch all beers and look for an exact name match.
    Search { query: String },
    Login {
        username: String,
        credentials: LoginHash,
    },
    Signup {
        user: NewUser,
        credentials: LoginHash,
    },
    /// Attach a review, then refresh `beer_name` unless a search newer
    /// than `search_generation` has been issued in the meantime.
    SubmitReview {
        credentials: LoginHash,
        payload: ReviewPayload,
        beer_name: Option<String>,
        search_generation: u64,
    },
}

impl ApiRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            ApiRequest::Search { .. } => RequestKind::Search,
            ApiRequest::Login { .. } | ApiRequest::Signup { .. } => RequestKind::Auth,
            ApiRequest::SubmitReview { .. } => RequestKind::Review,
        }
    }
}

#[derive(Debug)]
pub enum ApiResponse {
    Beers(Result<BeerList, ApiError>),
    User(Result<UserRecord, ApiError>),
    Reviewed(Result<(), ApiError>),
}

/// A request waiting to be executed.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub token: RequestToken,
    pub request: ApiRequest,
}

/// A finished request, ready for [`App::complete`](super::app::App::complete).
#[derive(Debug)]
pub struct Completion {
    pub token: RequestToken,
    pub request: ApiRequest,
    pub response: ApiResponse,
}

impl Dispatch {
    pub async fn execute(self, api: &ApiClient) -> Completion {
        let response = match &self.request {
            ApiRequest::Search { .. } => ApiResponse::Beers(api.list_beers().await),
            ApiRequest::Login { credentials, .. } => ApiResponse::User(api.login(credentials).await),
            ApiRequest::Signup { user, .. } => ApiResponse::User(api.create_user(user).await),
            ApiRequest::SubmitReview {
                credentials,
                payload,
                ..
            } => ApiResponse::Reviewed(api.add_review(credentials, payload).await),
        };

        Completion {
            token: self.token,
            request: self.request,
            response,
        }
    }
}

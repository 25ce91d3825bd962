//! Durable client-side session storage.
//!
//! Holds the `loginHash` token and the authenticated user id between runs,
//! the way a browser client would keep them in local storage.

mod store;

pub use store::{SessionError, SessionStore, StoredSession};

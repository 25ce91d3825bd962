//! HTTP client for the beer API.
//!
//! Thin reqwest wrapper: one method per endpoint, JSON in and out. The
//! client never touches UI state; the app applies its results.

mod client;
mod error;
mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    Author, AuthorRef, Beer, BeerList, Measure, NewReview, NewUser, Review, ReviewPayload,
    UserRecord,
};

//! Intents for the client state store.

use crate::api::Beer;
use crate::ui::mvi::Intent;

/// One intent per mutator. None of them can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreIntent {
    /// Start of a new form submission: clears the review form, the search
    /// result flags and the search-form request. Login state survives.
    ResetState,

    /// User asked for the search UI. Idempotent.
    SetSearchFormVisible,

    /// Flip the logged-in flag (login/signup success, logout).
    ToggleUserLoggedIn,

    SetCurrentUserId { id: String },

    /// Replace the beer record wholesale. `None` forgets it.
    SetBeerData { beer: Option<Beer> },

    /// The last search matched a beer.
    MarkQueryFound,

    SetSearchBeerId { id: String },

    /// Show/hide the review-submission form.
    ToggleReviewEntry,

    /// Force the review form closed (after a successful submission).
    ClearReviewEntry,
}

impl Intent for StoreIntent {}

//! Client state store.
//!
//! Holds the session flags and the last beer found by a search.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `AppState`, readable from anywhere, writable only here
//! - `intent.rs` - one intent per mutator (reset, toggles, setters)
//! - `reducer.rs` - field assignments (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::StoreIntent;
pub use reducer::StoreReducer;
pub use state::AppState;

//! Model-View-Intent (MVI) primitives.
//!
//! Every change to client state goes through a reducer:
//!
//! ```text
//! user action / API completion ──→ Intent ──→ Reducer ──→ State ──→ Projector ──→ Document
//!        ↑                                                                          │
//!        └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: owned value describing the session and the last search
//! - **Intent**: one named mutation
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

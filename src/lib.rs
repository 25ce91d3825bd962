//! Client for a beer-review service: search beers, read and post reviews,
//! sign up and log in.
//!
//! The heart of the crate is the state/render loop in [`ui`]: an
//! [`AppState`](ui::store::AppState) changed only through reducer intents,
//! a pure projector from state to a [`RenderPass`](ui::view::RenderPass),
//! and the [`App`](ui::app::App) that ties user actions and API
//! completions to both.

pub mod api;
pub mod config;
pub mod logging;
pub mod session;
pub mod ui;

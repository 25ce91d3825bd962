pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod markup;
pub mod mvi;
pub mod projector;
pub mod render;
pub mod requests;
pub mod runtime;
pub mod store;
pub mod terminal_guard;
pub mod theme;
pub mod view;

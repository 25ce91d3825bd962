//! Marker trait for intents.

/// A named state mutation.
///
/// Intents are produced by user actions (form submits, button presses) and
/// by API completions, and are only ever applied through a [`Reducer`].
///
/// [`Reducer`]: super::Reducer
pub trait Intent: Send + 'static {}

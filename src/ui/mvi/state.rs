/// Marker trait for reducer-owned state.
///
/// `Default` is the freshly-started state; `PartialEq` lets tests and the
/// projector compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

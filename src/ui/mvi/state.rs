/// Marker trait for renderable UI state.
///
/// `PartialEq` lets callers skip redraws when a reduction changed nothing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

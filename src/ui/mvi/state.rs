/// Marker trait for component state: cloneable, comparable, and holding
/// everything its view needs to render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

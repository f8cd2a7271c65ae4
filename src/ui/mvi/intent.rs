/// Marker trait for things a reducer can apply: a value delivered by a
/// subscription, a focus change, a screen switch.
pub trait Intent: Send + 'static {}

/// Marker trait for intents: user interactions (hover, click, typing)
/// or notifications forwarded from the event channel.
pub trait Intent: Send + 'static {}

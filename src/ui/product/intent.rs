use crate::review::Review;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProductIntent {
    /// Swatch at `index` hovered. Indices past the last variant are ignored.
    SelectVariant { index: usize },
    HoverNext,
    HoverPrevious,
    /// A review arrived on the event channel.
    ReviewReceived { review: Review },
}

impl Intent for ProductIntent {}

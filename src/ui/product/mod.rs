mod intent;
mod mailbox;
mod reducer;
mod state;
mod view;

pub use intent::ProductIntent;
pub use mailbox::ReviewMailbox;
pub use reducer::ProductReducer;
pub use state::{ProductState, DEFAULT_SHIPPING_FEE, FREE_SHIPPING};
pub use view::render_product;

use crate::catalog::VariantId;

/// Emitted upward by the Add/Remove buttons. The app shell owns the cart
/// and applies these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Add(VariantId),
    Remove(VariantId),
}

use std::sync::{Arc, OnceLock};

use crate::cart::Cart;
use crate::catalog::{Catalog, Variant};
use crate::review::Review;
use crate::ui::mvi::UiState;

use super::CartAction;

pub const DEFAULT_SHIPPING_FEE: &str = "$2.99";
pub const FREE_SHIPPING: &str = "Free";

/// Product viewer state. The catalog never changes after construction;
/// only the selected variant and the received reviews do. Clones share
/// the catalog and the fee.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductState {
    catalog: Arc<Catalog>,
    shipping_fee: Arc<str>,
    selected_variant: usize,
    reviews: Vec<Review>,
}

impl UiState for ProductState {}

impl Default for ProductState {
    /// Also the placeholder left behind while a reducer runs, so it is
    /// built once and cloned afterwards.
    fn default() -> Self {
        static DEFAULT: OnceLock<ProductState> = OnceLock::new();
        DEFAULT
            .get_or_init(|| Self::new(Catalog::default(), DEFAULT_SHIPPING_FEE.to_string()))
            .clone()
    }
}

impl ProductState {
    pub fn new(catalog: Catalog, shipping_fee: String) -> Self {
        Self {
            catalog: Arc::new(catalog),
            shipping_fee: Arc::from(shipping_fee),
            selected_variant: 0,
            reviews: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_index(&self) -> usize {
        self.selected_variant
    }

    pub fn selected(&self) -> Option<&Variant> {
        self.catalog.variant(self.selected_variant)
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn title(&self) -> String {
        self.catalog.title()
    }

    pub fn image(&self) -> &str {
        self.selected().map_or("", |variant| variant.image.as_str())
    }

    pub fn in_stock(&self) -> bool {
        self.selected().is_some_and(Variant::in_stock)
    }

    pub fn shipping(&self, premium_member: bool) -> &str {
        if premium_member {
            FREE_SHIPPING
        } else {
            &*self.shipping_fee
        }
    }

    pub fn cart_is_empty(cart: &Cart) -> bool {
        cart.is_empty()
    }

    pub fn add_enabled(&self) -> bool {
        self.in_stock()
    }

    pub fn remove_enabled(cart: &Cart) -> bool {
        !Self::cart_is_empty(cart)
    }

    /// "Add" click. Yields the action for the cart owner, or `None` while
    /// the button is disabled.
    pub fn add_to_cart(&self) -> Option<CartAction> {
        if !self.add_enabled() {
            return None;
        }
        self.selected().map(|variant| CartAction::Add(variant.id))
    }

    /// "Remove" click, enabled only while the cart has entries.
    pub fn remove_from_cart(&self, cart: &Cart) -> Option<CartAction> {
        if !Self::remove_enabled(cart) {
            return None;
        }
        self.selected().map(|variant| CartAction::Remove(variant.id))
    }

    pub(super) fn with_selected(mut self, index: usize) -> Self {
        if index < self.catalog.variants.len() {
            self.selected_variant = index;
        }
        self
    }

    pub(super) fn with_review(mut self, review: Review) -> Self {
        self.reviews.push(review);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_share_one_catalog() {
        let first = ProductState::default();
        let second = ProductState::default();
        assert!(std::ptr::eq(first.catalog(), second.catalog()));
        assert_eq!(first.shipping(false), DEFAULT_SHIPPING_FEE);
    }

    #[test]
    fn reducing_keeps_the_configured_catalog() {
        use crate::ui::mvi::Reducer;
        use crate::ui::product::{ProductIntent, ProductReducer};

        let mut catalog = Catalog::default();
        catalog.brand = "Acme".to_string();
        let state = ProductState::new(catalog, "$1.00".to_string());
        let catalog_ptr: *const Catalog = state.catalog();

        let state = ProductReducer::reduce(state, ProductIntent::HoverNext);
        assert!(std::ptr::eq(state.catalog(), catalog_ptr));
        assert_eq!(state.title(), "Acme Socks");
        assert_eq!(state.shipping(false), "$1.00");
    }
}

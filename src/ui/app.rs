use crate::bus::{EventChannel, ReviewSubmitted};
use crate::cart::Cart;
use crate::catalog::VariantId;
use crate::config::Config;
use crate::ui::mvi::Reducer;
use crate::ui::product::{CartAction, ProductIntent, ProductReducer, ProductState, ReviewMailbox};
use crate::ui::review_form::{ReviewFormIntent, ReviewFormReducer, ReviewFormState};
use crate::ui::tabs::{Tab, TabsIntent, TabsReducer, TabsState};
use std::sync::Arc;

/// Which panel receives key presses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Product,
    TabBar,
    Form,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The page root. Owns the cart and the premium flag, hands them down to
/// the product viewer, and applies the viewer's add/remove actions.
pub struct App {
    should_quit: bool,
    focus: Focus,
    premium_member: bool,
    cart: Cart,
    bus: Arc<EventChannel>,
    product: ProductState,
    review_mailbox: ReviewMailbox,
    tabs: TabsState,
    /// Always present, whichever tab is selected.
    review_form: ReviewFormState,
}

impl App {
    pub fn new(config: &Config, bus: Arc<EventChannel>) -> Self {
        let review_mailbox = ReviewMailbox::mount(&bus);
        Self {
            should_quit: false,
            focus: Focus::Product,
            premium_member: config.store.premium_member,
            cart: config.store.initial_cart.iter().copied().collect(),
            bus,
            product: ProductState::new(config.product.clone(), config.store.shipping_fee.clone()),
            review_mailbox,
            tabs: TabsState::default(),
            review_form: ReviewFormState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn premium_member(&self) -> bool {
        self.premium_member
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn bus(&self) -> &Arc<EventChannel> {
        &self.bus
    }

    pub fn product(&self) -> &ProductState {
        &self.product
    }

    pub fn tabs(&self) -> &TabsState {
        &self.tabs
    }

    pub fn review_form(&self) -> &ReviewFormState {
        &self.review_form
    }

    /// Tab moves Product → TabBar → Form → Product. The form is skipped
    /// while its tab is hidden.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Product => Focus::TabBar,
            Focus::TabBar if self.tabs.form_visible() => Focus::Form,
            Focus::TabBar | Focus::Form => Focus::Product,
        };
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if focus == Focus::Form && !self.tabs.form_visible() {
            return;
        }
        self.focus = focus;
    }

    // ========================================================================
    // Cart (owned here, mutated only through CartAction)
    // ========================================================================

    pub fn add_to_cart(&mut self, id: VariantId) {
        self.cart.add(id);
        tracing::info!(variant = %id, items = self.cart.len(), "added to cart");
    }

    pub fn remove_from_cart(&mut self, id: VariantId) {
        if self.cart.remove(id) {
            tracing::info!(variant = %id, items = self.cart.len(), "removed from cart");
        } else {
            tracing::debug!(variant = %id, "remove ignored, variant not in cart");
        }
    }

    pub fn apply_cart_action(&mut self, action: CartAction) {
        match action {
            CartAction::Add(id) => self.add_to_cart(id),
            CartAction::Remove(id) => self.remove_from_cart(id),
        }
    }

    /// "Add" button. Does nothing while the selected variant is sold out.
    pub fn press_add(&mut self) {
        if let Some(action) = self.product.add_to_cart() {
            self.apply_cart_action(action);
        }
    }

    /// "Remove" button. Does nothing while the cart is empty.
    pub fn press_remove(&mut self) {
        if let Some(action) = self.product.remove_from_cart(&self.cart) {
            self.apply_cart_action(action);
        }
    }

    // ========================================================================
    // Component dispatch (MVI pattern)
    // ========================================================================

    pub fn dispatch_product(&mut self, intent: ProductIntent) {
        dispatch_mvi!(self, product, ProductReducer, intent);
    }

    pub fn dispatch_tabs(&mut self, intent: TabsIntent) {
        dispatch_mvi!(self, tabs, TabsReducer, intent);
        if self.focus == Focus::Form && !self.tabs.form_visible() {
            self.focus = Focus::TabBar;
        }
    }

    pub fn dispatch_review_form(&mut self, intent: ReviewFormIntent) {
        dispatch_mvi!(self, review_form, ReviewFormReducer, intent);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.dispatch_tabs(TabsIntent::Select(tab));
    }

    /// Submit the review form.
    ///
    /// A complete form is published on the event channel and then cleared.
    /// An incomplete one gets its missing-field messages appended.
    pub fn submit_review(&mut self) {
        match self.review_form.validate() {
            Ok(review) => {
                let delivered = self.bus.publish::<ReviewSubmitted>(&review);
                tracing::info!(
                    reviewer = %review.name,
                    rating = review.rating.value(),
                    delivered,
                    "review submitted"
                );
                self.dispatch_review_form(ReviewFormIntent::Submitted);
            }
            Err(missing) => {
                tracing::debug!(missing = missing.len(), "review rejected");
                self.dispatch_review_form(ReviewFormIntent::Rejected { missing });
            }
        }
        self.pump_reviews();
    }

    /// Feed reviews delivered by the event channel into the product viewer.
    pub fn pump_reviews(&mut self) {
        for review in self.review_mailbox.drain() {
            self.dispatch_product(ProductIntent::ReviewReceived { review });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        App::new(&Config::default(), Arc::new(EventChannel::new()))
    }

    #[test]
    fn starts_on_product_with_empty_cart() {
        let app = make_app();
        assert_eq!(app.focus(), Focus::Product);
        assert!(app.cart().is_empty());
        assert!(!app.premium_member());
        assert_eq!(app.tabs().selected, Tab::Reviews);
    }

    #[test]
    fn form_focus_requires_visible_form() {
        let mut app = make_app();
        app.set_focus(Focus::Form);
        assert_eq!(app.focus(), Focus::Product);

        app.select_tab(Tab::WriteReview);
        app.set_focus(Focus::Form);
        assert_eq!(app.focus(), Focus::Form);
    }

    #[test]
    fn hiding_form_moves_focus_to_tab_bar() {
        let mut app = make_app();
        app.select_tab(Tab::WriteReview);
        app.set_focus(Focus::Form);
        app.select_tab(Tab::Reviews);
        assert_eq!(app.focus(), Focus::TabBar);
    }

    #[test]
    fn cycle_focus_skips_hidden_form() {
        let mut app = make_app();
        app.cycle_focus();
        assert_eq!(app.focus(), Focus::TabBar);
        app.cycle_focus();
        assert_eq!(app.focus(), Focus::Product);
    }

    #[test]
    fn mounts_one_review_subscriber() {
        let app = make_app();
        assert_eq!(app.bus().subscriber_count::<ReviewSubmitted>(), 1);
    }
}

mod common;

use common::{ctrl, make_app, press};
use crossterm::event::KeyCode;
use parking_lot::Mutex;
use product_page::bus::{EventChannel, ReviewSubmitted};
use product_page::catalog::VariantId;
use product_page::config::Config;
use product_page::review::Rating;
use product_page::ui::app::{App, Focus};
use product_page::ui::input::handle_key;
use product_page::ui::review_form::ReviewError;
use product_page::ui::tabs::Tab;
use std::sync::Arc;

const GREEN: VariantId = VariantId(2234);
const BLUE: VariantId = VariantId(2235);

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, press(KeyCode::Char(ch)));
    }
}

/// Open the form and fill the given fields via the keyboard.
fn open_form(app: &mut App) {
    handle_key(app, press(KeyCode::Tab));
    handle_key(app, press(KeyCode::Right));
    handle_key(app, press(KeyCode::Enter));
    assert_eq!(app.focus(), Focus::Form);
}

fn fill_form(app: &mut App, name: &str, text: &str, rating: Option<char>) {
    type_str(app, name);
    handle_key(app, press(KeyCode::Down));
    type_str(app, text);
    handle_key(app, press(KeyCode::Down));
    if let Some(digit) = rating {
        handle_key(app, press(KeyCode::Char(digit)));
    }
    handle_key(app, press(KeyCode::Down));
}

// -- cart ------------------------------------------------------------------

#[test]
fn add_then_remove_round_trips_cart() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Char('a')));
    assert_eq!(app.cart().items(), &[GREEN]);
    handle_key(&mut app, press(KeyCode::Char('r')));
    assert!(app.cart().is_empty());
}

#[test]
fn remove_on_empty_cart_is_noop() {
    let mut app = make_app();
    app.press_remove();
    app.remove_from_cart(GREEN);
    assert!(app.cart().is_empty());
}

#[test]
fn remove_of_absent_variant_keeps_cart() {
    let mut app = make_app();
    app.press_add();
    app.press_add();
    // Hover the blue swatch: remove now targets 2235, which isn't in the cart.
    handle_key(&mut app, press(KeyCode::Right));
    app.press_remove();
    assert_eq!(app.cart().items(), &[GREEN, GREEN]);
}

#[test]
fn add_is_disabled_for_sold_out_variant() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Right));
    assert!(!app.product().in_stock());
    app.press_add();
    assert!(app.cart().is_empty());
}

#[test]
fn remove_scans_from_the_end() {
    let mut app = make_app();
    app.add_to_cart(GREEN);
    app.add_to_cart(BLUE);
    app.add_to_cart(GREEN);
    app.remove_from_cart(GREEN);
    assert_eq!(app.cart().items(), &[GREEN, BLUE]);
}

#[test]
fn digit_keys_hover_swatches() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Char('2')));
    assert_eq!(app.product().selected_index(), 1);
    handle_key(&mut app, press(KeyCode::Char('9')));
    assert_eq!(app.product().selected_index(), 1);
    handle_key(&mut app, press(KeyCode::Char('0')));
    assert_eq!(app.product().selected_index(), 1);
    handle_key(&mut app, press(KeyCode::Char('1')));
    assert_eq!(app.product().selected_index(), 0);
}

#[test]
fn premium_and_initial_cart_come_from_config() {
    let mut config = Config::default();
    config.store.premium_member = true;
    config.store.initial_cart = vec![GREEN];
    let app = App::new(&config, Arc::new(EventChannel::new()));
    assert!(app.premium_member());
    assert_eq!(app.product().shipping(app.premium_member()), "Free");
    assert_eq!(app.cart().items(), &[GREEN]);
}

// -- review flow -----------------------------------------------------------

#[test]
fn valid_submit_publishes_once_and_lists_review() {
    let bus = Arc::new(EventChannel::new());
    let published = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&published);
    let mut app = App::new(&Config::default(), Arc::clone(&bus));
    bus.subscribe::<ReviewSubmitted, _>(move |review| sink.lock().push(review.clone()));

    open_form(&mut app);
    fill_form(&mut app, "Al", "Great socks", Some('5'));
    handle_key(&mut app, press(KeyCode::Enter));

    assert_eq!(*published.lock(), vec![common::review("Al", "Great socks", 5)]);
    assert_eq!(app.product().reviews().len(), 1);
    assert_eq!(app.product().reviews()[0].rating, Rating::new(5).unwrap());

    let form = app.review_form();
    assert!(form.name.is_empty());
    assert!(form.text.is_empty());
    assert!(form.rating.is_none());
    assert!(form.errors.is_empty());
}

#[test]
fn rating_keys_accept_one_to_five_and_delete_clears() {
    let mut app = make_app();
    open_form(&mut app);
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Down));

    type_str(&mut app, "9x0");
    assert_eq!(app.review_form().rating, None);
    type_str(&mut app, "4");
    assert_eq!(app.review_form().rating, Rating::new(4));
    handle_key(&mut app, press(KeyCode::Delete));
    assert_eq!(app.review_form().rating, None);
    type_str(&mut app, "2");
    handle_key(&mut app, press(KeyCode::Backspace));
    assert_eq!(app.review_form().rating, None);
}

#[test]
fn empty_submit_yields_three_ordered_errors() {
    let mut app = make_app();
    open_form(&mut app);
    handle_key(&mut app, ctrl('s'));

    assert_eq!(
        app.review_form().errors,
        vec![
            ReviewError::MissingName,
            ReviewError::MissingReview,
            ReviewError::MissingRating,
        ]
    );
    assert!(app.product().reviews().is_empty());
}

#[test]
fn successful_submit_does_not_clear_earlier_errors() {
    let mut app = make_app();
    open_form(&mut app);
    fill_form(&mut app, "Al", "Great socks", None);
    app.submit_review();
    assert_eq!(app.review_form().errors, vec![ReviewError::MissingRating]);

    handle_key(&mut app, press(KeyCode::Up));
    handle_key(&mut app, press(KeyCode::Char('4')));
    app.submit_review();

    assert_eq!(app.product().reviews().len(), 1);
    assert_eq!(app.review_form().errors, vec![ReviewError::MissingRating]);
}

#[test]
fn switching_tabs_keeps_form_state() {
    let mut app = make_app();
    open_form(&mut app);
    type_str(&mut app, "Half typ");
    app.submit_review();
    let before = app.review_form().clone();
    assert!(!before.errors.is_empty());

    app.select_tab(Tab::Reviews);
    app.select_tab(Tab::WriteReview);
    app.set_focus(Focus::Form);
    handle_key(&mut app, press(KeyCode::Esc));
    assert_eq!(app.focus(), Focus::TabBar);
    handle_key(&mut app, press(KeyCode::Left));
    handle_key(&mut app, press(KeyCode::Right));

    assert_eq!(app.review_form(), &before);
}

#[test]
fn reviews_published_before_mount_are_not_shown() {
    let bus = Arc::new(EventChannel::new());
    bus.publish::<ReviewSubmitted>(&common::review("Ghost", "too early", 1));

    let mut app = App::new(&Config::default(), Arc::clone(&bus));
    app.pump_reviews();
    assert!(app.product().reviews().is_empty());

    bus.publish::<ReviewSubmitted>(&common::review("Al", "Great socks", 5));
    app.pump_reviews();
    assert_eq!(app.product().reviews().len(), 1);
}

// -- quitting --------------------------------------------------------------

#[test]
fn ctrl_q_quits_from_the_form() {
    let mut app = make_app();
    open_form(&mut app);
    handle_key(&mut app, ctrl('q'));
    assert!(app.should_quit());
}

#[test]
fn q_in_form_is_typed_not_quit() {
    let mut app = make_app();
    open_form(&mut app);
    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(!app.should_quit());
    assert_eq!(app.review_form().name, "q");
}

#[test]
fn esc_quits_from_product_panel() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Esc));
    assert!(app.should_quit());
}

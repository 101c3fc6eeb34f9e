use crate::review::Rating;
use crate::ui::app::{App, Focus};
use crate::ui::product::ProductIntent;
use crate::ui::review_form::{FormField, ReviewFormIntent};
use crate::ui::tabs::{Tab, TabsIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::Tab {
        app.cycle_focus();
        return;
    }

    match app.focus() {
        Focus::Product => handle_product_key(app, key),
        Focus::TabBar => handle_tab_bar_key(app, key),
        Focus::Form => handle_form_key(app, key),
    }

    // Reviews published during this key press reach the viewer before the
    // next draw.
    app.pump_reviews();
}

fn handle_product_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
        KeyCode::Left | KeyCode::Char('h') => app.dispatch_product(ProductIntent::HoverPrevious),
        KeyCode::Right | KeyCode::Char('l') => app.dispatch_product(ProductIntent::HoverNext),
        KeyCode::Char('a') | KeyCode::Char('+') => app.press_add(),
        KeyCode::Char('r') | KeyCode::Char('d') | KeyCode::Char('-') => app.press_remove(),
        KeyCode::Char(ch) => {
            if let Some(index) = swatch_index(ch) {
                app.dispatch_product(ProductIntent::SelectVariant { index });
            }
        }
        _ => {}
    }
}

fn handle_tab_bar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
        KeyCode::Left => app.dispatch_tabs(TabsIntent::Previous),
        KeyCode::Right => app.dispatch_tabs(TabsIntent::Next),
        KeyCode::Enter | KeyCode::Down if app.tabs().form_visible() => app.set_focus(Focus::Form),
        KeyCode::Char('w') => {
            app.select_tab(Tab::WriteReview);
            app.set_focus(Focus::Form);
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit_review();
        return;
    }

    match key.code {
        KeyCode::Esc => app.set_focus(Focus::TabBar),
        KeyCode::Down => app.dispatch_review_form(ReviewFormIntent::FocusNext),
        KeyCode::Up | KeyCode::BackTab => {
            app.dispatch_review_form(ReviewFormIntent::FocusPrevious)
        }
        KeyCode::Enter => {
            if app.review_form().focused == FormField::Submit {
                app.submit_review();
            } else {
                app.dispatch_review_form(ReviewFormIntent::FocusNext);
            }
        }
        _ if app.review_form().focused == FormField::Rating => handle_rating_key(app, key),
        KeyCode::Backspace => app.dispatch_review_form(ReviewFormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_review_form(ReviewFormIntent::InputChar(ch))
        }
        _ => {}
    }
}

/// Rating accepts the digits 1-5 only; anything else typed is ignored.
fn handle_rating_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(ch) => {
            if let Some(rating) = Rating::from_digit(ch) {
                app.dispatch_review_form(ReviewFormIntent::SetRating(rating));
            }
        }
        KeyCode::Backspace | KeyCode::Delete => {
            app.dispatch_review_form(ReviewFormIntent::ClearRating)
        }
        _ => {}
    }
}

/// Digit keys 1-9 pick swatch 0-8.
fn swatch_index(ch: char) -> Option<usize> {
    let digit = ch.to_digit(10)?;
    usize::try_from(digit).ok()?.checked_sub(1)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::swatch_index;

    #[test]
    fn swatch_index_maps_one_based_digits() {
        assert_eq!(swatch_index('1'), Some(0));
        assert_eq!(swatch_index('9'), Some(8));
        assert_eq!(swatch_index('0'), None);
        assert_eq!(swatch_index('a'), None);
    }
}

use crate::review::Review;
use crate::ui::review_form::{render_review_form, ReviewFormState};
use crate::ui::tabs::state::{Tab, TabsState};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_GREEN, DISABLED_TEXT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR,
    HEADER_TEXT,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

pub const NO_REVIEWS: &str = "There are no reviews yet.";

/// Borrowed inputs for one draw of the tab panel.
pub struct TabsView<'a> {
    pub tabs: &'a TabsState,
    pub reviews: &'a [Review],
    pub form: &'a ReviewFormState,
    pub bar_focused: bool,
    pub form_focused: bool,
}

pub fn render_tabs(frame: &mut Frame<'_>, area: Rect, view: TabsView<'_>) {
    let border = if view.bar_focused || view.form_focused {
        FOCUS_BORDER
    } else {
        GLOBAL_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let mut highlight = Style::default()
        .fg(BRAND_GREEN)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    if view.bar_focused {
        highlight = highlight.bg(ACTIVE_HIGHLIGHT);
    }
    let bar = Tabs::new(Tab::ALL.iter().map(|tab| tab.label()))
        .select(view.tabs.selected.index())
        .style(Style::default().fg(HEADER_TEXT))
        .highlight_style(highlight)
        .divider(Span::styled("│", Style::default().fg(HEADER_SEPARATOR)));
    frame.render_widget(bar, rows[0]);

    // The form state lives in the app either way; only its visibility
    // follows the selected tab.
    if view.tabs.reviews_visible() {
        let pane = Paragraph::new(reviews_pane_lines(view.reviews)).wrap(Wrap { trim: false });
        frame.render_widget(pane, rows[2]);
    } else if view.tabs.form_visible() {
        render_review_form(frame, rows[2], view.form, view.form_focused);
    }
}

pub fn reviews_pane_lines(reviews: &[Review]) -> Vec<Line<'static>> {
    if reviews.is_empty() {
        return vec![Line::from(Span::styled(
            NO_REVIEWS,
            Style::default().fg(DISABLED_TEXT),
        ))];
    }

    let text = Style::default().fg(HEADER_TEXT);
    let mut lines = Vec::new();
    for (index, review) in reviews.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            review.name.clone(),
            text.add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("Rating: {}", review.rating),
            Style::default().fg(BRAND_GREEN),
        )));
        lines.push(Line::from(Span::styled(review.text.clone(), text)));
    }
    lines
}

use crate::ui::review_form::state::{FormField, ReviewFormState};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_GREEN, DISABLED_TEXT, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

const LABEL_WIDTH: usize = 8;

pub fn render_review_form(frame: &mut Frame<'_>, area: Rect, state: &ReviewFormState, focused: bool) {
    let widget = Paragraph::new(form_lines(state, focused)).wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn form_lines(state: &ReviewFormState, focused: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if !state.errors.is_empty() {
        lines.push(Line::from(Span::styled(
            "Please correct the following error(s):",
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )));
        for message in state.error_messages() {
            lines.push(Line::from(Span::styled(
                format!("  - {message}"),
                Style::default().fg(STATUS_ERROR),
            )));
        }
        lines.push(Line::from(""));
    }

    let rating = state
        .rating
        .map(|r| r.to_string())
        .unwrap_or_else(|| "-".to_string());

    let active = |field: FormField| focused && state.focused == field;
    lines.push(field_line("Name:", &state.name, active(FormField::Name)));
    lines.push(field_line("Review:", &state.text, active(FormField::Review)));
    lines.push(field_line(
        "Rating:",
        &format!("{rating}  (1-5)"),
        active(FormField::Rating),
    ));
    lines.push(Line::from(""));

    let submit_style = if active(FormField::Submit) {
        Style::default().fg(Color::Black).bg(BRAND_GREEN)
    } else {
        Style::default().fg(BRAND_GREEN)
    };
    lines.push(Line::from(Span::styled("[ Submit ]", submit_style)));
    lines
}

fn field_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let label_style = Style::default().fg(DISABLED_TEXT);
    let mut value_style = Style::default().fg(HEADER_TEXT);
    if active {
        value_style = value_style.bg(ACTIVE_HIGHLIGHT);
    }
    let cursor = if active { "▏" } else { "" };
    Line::from(vec![
        Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), label_style),
        Span::styled(format!("{value}{cursor}"), value_style),
    ])
}

use crate::cart::Cart;
use crate::ui::product::state::ProductState;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_GREEN, DISABLED_TEXT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT,
    STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_product(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &ProductState,
    cart: &Cart,
    premium_member: bool,
    focused: bool,
) {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(
            " Product ",
            Style::default().fg(BRAND_GREEN),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let widget = Paragraph::new(product_lines(state, cart, premium_member))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn product_lines(
    state: &ProductState,
    cart: &Cart,
    premium_member: bool,
) -> Vec<Line<'static>> {
    let text = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![
        Line::from(Span::styled(
            state.title(),
            text.add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Image: ", text),
            Span::styled(state.image().to_string(), Style::default().fg(DISABLED_TEXT)),
        ]),
        Line::from(""),
    ];

    lines.push(if state.in_stock() {
        Line::from(Span::styled("In Stock", Style::default().fg(STATUS_OK)))
    } else {
        Line::from(Span::styled("Out of Stock", Style::default().fg(STATUS_ERROR)))
    });
    lines.push(Line::from(Span::styled(
        format!("Shipping: {}", state.shipping(premium_member)),
        text,
    )));
    lines.push(Line::from(""));

    for detail in &state.catalog().details {
        lines.push(Line::from(Span::styled(format!("  • {detail}"), text)));
    }
    lines.push(Line::from(""));

    let mut swatches = vec![Span::styled("Colors: ", text)];
    for (index, variant) in state.catalog().variants.iter().enumerate() {
        let color = variant.color.parse::<Color>().unwrap_or(HEADER_TEXT);
        let mut style = Style::default().fg(color);
        if index == state.selected_index() {
            style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
        }
        swatches.push(Span::styled(format!(" ■ {} ", variant.color), style));
    }
    lines.push(Line::from(swatches));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        button("Add", state.add_enabled()),
        Span::raw("  "),
        button("Remove", ProductState::remove_enabled(cart)),
    ]));
    lines
}

fn button(label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(Color::Black).bg(BRAND_GREEN)
    } else {
        Style::default()
            .fg(DISABLED_TEXT)
            .add_modifier(Modifier::CROSSED_OUT)
    };
    Span::styled(format!("[ {label} ]"), style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VariantId;

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn shows_stock_and_shipping_for_default_variant() {
        let text = text_of(&product_lines(&ProductState::default(), &Cart::new(), false));
        assert_eq!(text[0], "Vue Mastery Socks");
        assert!(text.iter().any(|l| l == "In Stock"));
        assert!(text.iter().any(|l| l == "Shipping: $2.99"));
        assert!(text.iter().any(|l| l.contains("80% cotton")));
    }

    #[test]
    fn premium_member_sees_free_shipping() {
        let cart: Cart = [VariantId(2234)].into_iter().collect();
        let text = text_of(&product_lines(&ProductState::default(), &cart, true));
        assert!(text.iter().any(|l| l == "Shipping: Free"));
    }
}

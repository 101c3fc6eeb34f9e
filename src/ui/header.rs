use crate::cart::Cart;
use crate::ui::product::ProductState;
use crate::ui::theme::{BRAND_GREEN, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, product: &ProductState, cart: &Cart, premium_member: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (stock, stock_style) = if product.in_stock() {
            ("In Stock", Style::default().fg(STATUS_OK))
        } else {
            ("Out of Stock", Style::default().fg(STATUS_ERROR))
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                product.title(),
                Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(stock, stock_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("Shipping: {}", product.shipping(premium_member)),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Cart({})", cart.len()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

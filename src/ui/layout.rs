use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Below this width the product and tab panels stack vertically.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRegions {
    pub header: Rect,
    pub product: Rect,
    pub tabs: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> PageRegions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };

    let direction = if body.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let panels = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);

    PageRegions {
        header,
        product: panels[0],
        tabs: panels[1],
        footer,
    }
}

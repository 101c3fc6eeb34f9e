use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::product::render_product;
use crate::ui::tabs::{render_tabs, TabsView};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    frame.render_widget(
        Header::new().widget(app.product(), app.cart(), app.premium_member()),
        regions.header,
    );

    frame.render_widget(Clear, regions.product);
    render_product(
        frame,
        regions.product,
        app.product(),
        app.cart(),
        app.premium_member(),
        app.focus() == Focus::Product,
    );

    frame.render_widget(Clear, regions.tabs);
    render_tabs(
        frame,
        regions.tabs,
        TabsView {
            tabs: app.tabs(),
            reviews: app.product().reviews(),
            form: app.review_form(),
            bar_focused: app.focus() == Focus::TabBar,
            form_focused: app.focus() == Focus::Form,
        },
    );

    frame.render_widget(Footer::new().widget(regions.footer, app.focus()), regions.footer);
}

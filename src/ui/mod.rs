pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod product;
pub mod render;
pub mod review_form;
pub mod runtime;
pub mod tabs;
pub mod terminal_guard;
pub mod theme;

pub mod bus;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod review;
pub mod shutdown;
pub mod ui;

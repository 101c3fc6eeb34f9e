//! Shared test utilities.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use product_page::bus::EventChannel;
use product_page::config::Config;
use product_page::review::{Rating, Review};
use product_page::ui::app::App;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub fn make_app() -> App {
    App::new(&Config::default(), Arc::new(EventChannel::new()))
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn review(name: &str, text: &str, rating: u8) -> Review {
    Review {
        name: name.to_string(),
        text: text.to_string(),
        rating: Rating::new(rating).expect("rating in 1..=5"),
    }
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

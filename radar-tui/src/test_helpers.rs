//! Test helpers: a seeded app and key-press shorthands.

use crossterm::event::{KeyCode, KeyEvent};

use radar_core::DashboardConfig;

use crate::app::AppState;
use crate::input::handle_key;

/// App over 20 seeded sample records with default config.
pub fn test_app() -> AppState {
    let mut config = DashboardConfig::default();
    config.sample.seed = Some(7);
    AppState::with_sample_data(config)
}

pub fn press(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::from(code));
}

pub fn type_text(app: &mut AppState, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

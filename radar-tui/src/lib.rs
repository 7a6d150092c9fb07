//! Radar TUI — terminal dashboard over the radar record store.
//!
//! Views:
//! 1. Main — stat cards, search, filter chips and the paginated radar table
//! 2. Statistics — status distribution and tag counts with a time window
//! 3. Data Management — CSV export of the visible list and CSV import
//!
//! Record details, comments, settings and confirmations are overlays.

pub mod app;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;

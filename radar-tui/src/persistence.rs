//! UI preference persistence — JSON save/load across restarts.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use radar_core::stats::TimeRange;

use crate::app::{AppState, Column, Overlay, RowSpacing, View};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub view: View,
    pub project: String,
    pub row_spacing: RowSpacing,
    pub hidden_columns: BTreeSet<Column>,
    pub time_range: TimeRange,
    pub welcome_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            view: View::Main,
            project: String::new(),
            row_spacing: RowSpacing::Dense,
            hidden_columns: BTreeSet::new(),
            time_range: TimeRange::AllTime,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring corrupt state file");
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    debug!(path = %path.display(), "state saved");
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        view: app.view,
        project: app.current_project().to_string(),
        row_spacing: app.row_spacing,
        hidden_columns: app.hidden_columns.clone(),
        time_range: app.stats.time_range,
        welcome_dismissed: !app.overlays.contains(&Overlay::Welcome),
    }
}

/// Apply persisted state to AppState. Unknown projects fall back to the first.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.view = state.view;
    app.project_idx = app
        .config
        .projects
        .iter()
        .position(|p| *p == state.project)
        .unwrap_or(0);
    app.row_spacing = state.row_spacing;
    app.hidden_columns = state.hidden_columns;
    app.stats.time_range = state.time_range;
    if !state.welcome_dismissed {
        app.push_overlay(Overlay::Welcome);
    }
}

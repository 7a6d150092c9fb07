//! Application state — single-owner, main-thread only.
//!
//! All dashboard state lives here: the record store, the active view, table
//! cursor, overlays and status messages. Input handlers call the methods on
//! [`AppState`]; renderers only read it.

use std::collections::{BTreeSet, VecDeque};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use radar_core::csv_io;
use radar_core::domain::{EditableField, Record, Status};
use radar_core::stats::{StatsSummary, TimeRange};
use radar_core::{Dashboard, DashboardConfig, RadarError};

/// Which view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Main,
    Stats,
    Data,
}

impl View {
    pub const ALL: [View; 3] = [View::Main, View::Stats, View::Data];

    pub fn index(self) -> usize {
        match self {
            View::Main => 0,
            View::Stats => 1,
            View::Data => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        View::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Main => "Main View",
            View::Stats => "Statistics",
            View::Data => "Data Management",
        }
    }

    pub fn next(self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

/// Table row density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowSpacing {
    #[default]
    Dense,
    Normal,
    Loose,
}

impl RowSpacing {
    pub fn label(self) -> &'static str {
        match self {
            RowSpacing::Dense => "Compact",
            RowSpacing::Normal => "Comfortable",
            RowSpacing::Loose => "Spacious",
        }
    }

    /// Terminal lines per table row.
    pub fn row_height(self) -> u16 {
        match self {
            RowSpacing::Dense => 1,
            RowSpacing::Normal => 2,
            RowSpacing::Loose => 3,
        }
    }

    pub fn next(self) -> RowSpacing {
        match self {
            RowSpacing::Dense => RowSpacing::Normal,
            RowSpacing::Normal => RowSpacing::Loose,
            RowSpacing::Loose => RowSpacing::Dense,
        }
    }

    pub fn prev(self) -> RowSpacing {
        self.next().next()
    }
}

/// Columns of the main table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    Id,
    Title,
    Dri,
    TeamDri,
    Status,
    Tags,
    Comments,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Id,
        Column::Title,
        Column::Dri,
        Column::TeamDri,
        Column::Status,
        Column::Tags,
        Column::Comments,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Column::Id => "Radar ID",
            Column::Title => "Title",
            Column::Dri => "Current DRI",
            Column::TeamDri => "Team DRI",
            Column::Status => "Status",
            Column::Tags => "Tags",
            Column::Comments => "Comments",
        }
    }
}

/// A filter chip in the main view: the three status cards followed by the
/// catalog tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chip {
    Status(Status),
    Tag(String),
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Validation,
    Import,
    Export,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Lookup => "ID",
            ErrorCategory::Validation => "VAL",
            ErrorCategory::Import => "IMP",
            ErrorCategory::Export => "EXP",
            ErrorCategory::Other => "ERR",
        }
    }
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// What a text prompt is collecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputPurpose {
    /// Live search; every keystroke refilters.
    Search,
    AddComment { record_id: String },
    EditComment { record_id: String, comment_id: String },
    EditNotes { record_id: String },
    ImportPath,
}

impl InputPurpose {
    pub fn title(&self) -> &'static str {
        match self {
            InputPurpose::Search => "Search",
            InputPurpose::AddComment { .. } => "Add Comment",
            InputPurpose::EditComment { .. } => "Edit Comment",
            InputPurpose::EditNotes { .. } => "Edit Notes",
            InputPurpose::ImportPath => "Import CSV",
        }
    }
}

/// Modal layers drawn over the active view. The last one receives input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Welcome,
    Help,
    ErrorHistory,
    Settings { cursor: usize },
    Record { id: String, comment_cursor: usize },
    ConfirmDelete { id: String },
    Input(InputPurpose),
    StatusDetail { status: Status, page: usize },
}

/// Main table state.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// Index into the visible list.
    pub cursor: usize,
    /// Index into [`AppState::chips`].
    pub chip_cursor: usize,
}

/// Statistics view state.
#[derive(Debug, Clone, Default)]
pub struct StatsViewState {
    /// Selected status row for drill-down.
    pub cursor: usize,
    pub time_range: TimeRange,
}

/// Data management view state.
#[derive(Debug, Clone, Default)]
pub struct DataViewState {
    pub last_export: Option<(PathBuf, usize)>,
    pub last_import: Option<(PathBuf, usize)>,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub view: View,
    pub running: bool,
    pub project_idx: usize,

    // Data
    pub config: DashboardConfig,
    pub dashboard: Dashboard,

    // View states
    pub table: TableState,
    pub row_spacing: RowSpacing,
    pub hidden_columns: BTreeSet<Column>,
    pub stats: StatsViewState,
    pub data: DataViewState,

    // Cross-cutting
    pub overlays: Vec<Overlay>,
    pub input: String,
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
}

const ERROR_HISTORY_CAP: usize = 50;

impl AppState {
    pub fn new(config: DashboardConfig, dashboard: Dashboard) -> Self {
        Self {
            view: View::Main,
            running: true,
            project_idx: 0,
            config,
            dashboard,
            table: TableState::default(),
            row_spacing: RowSpacing::default(),
            hidden_columns: BTreeSet::new(),
            stats: StatsViewState::default(),
            data: DataViewState::default(),
            overlays: Vec::new(),
            input: String::new(),
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
        }
    }

    /// App over freshly generated sample data.
    pub fn with_sample_data(config: DashboardConfig) -> Self {
        let dashboard = Dashboard::with_sample_data(&config);
        Self::new(config, dashboard)
    }

    // ── Navigation ───────────────────────────────────────────────────

    pub fn switch_view(&mut self, view: View) {
        if self.view != view {
            info!(from = ?self.view, to = ?view, "switch view");
            self.view = view;
        }
    }

    pub fn current_project(&self) -> &str {
        self.config
            .projects
            .get(self.project_idx)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn cycle_project(&mut self) {
        if self.config.projects.is_empty() {
            return;
        }
        self.project_idx = (self.project_idx + 1) % self.config.projects.len();
        let msg = format!("Switched to {}", self.current_project());
        self.set_status(msg);
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlays.last()
    }

    pub fn push_overlay(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }

    pub fn pop_overlay(&mut self) -> Option<Overlay> {
        self.overlays.pop()
    }

    // ── Table ────────────────────────────────────────────────────────

    pub fn page_size(&self) -> usize {
        self.config.page_size.max(1)
    }

    pub fn page(&self) -> usize {
        self.table.cursor / self.page_size()
    }

    pub fn page_count(&self) -> usize {
        self.dashboard.visible_len().div_ceil(self.page_size()).max(1)
    }

    /// Visible-list range shown on the current page.
    pub fn page_range(&self) -> std::ops::Range<usize> {
        let start = self.page() * self.page_size();
        let end = (start + self.page_size()).min(self.dashboard.visible_len());
        start.min(end)..end
    }

    pub fn cursor_record(&self) -> Option<&Record> {
        self.dashboard.visible_record(self.table.cursor)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.dashboard.visible_len();
        if len == 0 {
            self.table.cursor = 0;
            return;
        }
        let next = self.table.cursor as isize + delta;
        self.table.cursor = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn next_page(&mut self) {
        let len = self.dashboard.visible_len();
        let target = (self.page() + 1) * self.page_size();
        self.table.cursor = if target < len {
            target
        } else {
            len.saturating_sub(1)
        };
    }

    pub fn prev_page(&mut self) {
        let page = self.page();
        if page == 0 {
            self.table.cursor = 0;
        } else {
            self.table.cursor = (page - 1) * self.page_size();
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.dashboard.visible_len();
        if self.table.cursor >= len {
            self.table.cursor = len.saturating_sub(1);
        }
    }

    // ── Filters ──────────────────────────────────────────────────────

    /// Status cards followed by catalog tags.
    pub fn chips(&self) -> Vec<Chip> {
        Status::ALL
            .into_iter()
            .map(Chip::Status)
            .chain(self.dashboard.catalog().texts().map(|t| Chip::Tag(t.to_string())))
            .collect()
    }

    pub fn move_chip(&mut self, delta: isize) {
        let len = self.chips().len() as isize;
        if len == 0 {
            return;
        }
        self.table.chip_cursor = (self.table.chip_cursor as isize + delta).rem_euclid(len) as usize;
    }

    pub fn is_chip_active(&self, chip: &Chip) -> bool {
        let filter = self.dashboard.filter();
        match chip {
            Chip::Status(s) => filter.status_filter == Some(*s),
            Chip::Tag(t) => filter.tag_filter.as_deref() == Some(t.as_str()),
        }
    }

    pub fn toggle_chip(&mut self, chip: &Chip) {
        match chip {
            Chip::Status(s) => self.dashboard.toggle_status(*s),
            Chip::Tag(t) => self.dashboard.toggle_tag(t),
        }
        self.table.cursor = 0;
    }

    pub fn toggle_focused_chip(&mut self) {
        if let Some(chip) = self.chips().get(self.table.chip_cursor).cloned() {
            self.toggle_chip(&chip);
        }
    }

    pub fn set_search(&mut self, query: &str) {
        self.dashboard.set_search(query);
        self.table.cursor = 0;
    }

    pub fn clear_filters(&mut self) {
        self.dashboard.clear_filters();
        self.table.cursor = 0;
        self.set_status("Filters cleared");
    }

    // ── Settings ─────────────────────────────────────────────────────

    pub fn toggle_column(&mut self, column: Column) {
        if !self.hidden_columns.remove(&column) {
            self.hidden_columns.insert(column);
        }
    }

    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| !self.hidden_columns.contains(c))
            .collect()
    }

    // ── Record operations ────────────────────────────────────────────

    pub fn open_cursor_record(&mut self) {
        if let Some(id) = self.cursor_record().map(|r| r.id.clone()) {
            self.push_overlay(Overlay::Record {
                id,
                comment_cursor: 0,
            });
        }
    }

    pub fn request_delete(&mut self, id: String) {
        self.push_overlay(Overlay::ConfirmDelete { id });
    }

    /// Delete a record and close every overlay that refers to it.
    pub fn confirm_delete(&mut self, id: &str) {
        self.overlays.retain(|o| match o {
            Overlay::ConfirmDelete { id: other } | Overlay::Record { id: other, .. } => other != id,
            _ => true,
        });
        match self.dashboard.delete(id) {
            Some(_) => {
                info!(record_id = id, "record removed");
                self.clamp_cursor();
                self.set_status(format!("Radar {id} has been removed"));
            }
            None => self.set_warning(format!("Radar {id} was already removed")),
        }
    }

    pub fn add_comment(&mut self, record_id: &str, text: &str) {
        match self.dashboard.add_comment(record_id, text) {
            Ok(_) => {
                self.input.clear();
                self.set_status("Comment added successfully");
            }
            Err(e) => self.report(e, format!("add comment to {record_id}")),
        }
    }

    pub fn edit_comment(&mut self, record_id: &str, comment_id: &str, text: &str) {
        match self.dashboard.edit_comment(record_id, comment_id, text) {
            Ok(()) => self.set_status("Comment updated successfully"),
            Err(e) => self.report(e, format!("edit {comment_id}")),
        }
    }

    /// Move the team DRI to the next (or previous) configured team member.
    pub fn cycle_team_dri(&mut self, record_id: &str, direction: isize) {
        let Some(current) = self.dashboard.record(record_id).map(|r| r.team_dri.clone()) else {
            self.report(RadarError::record_not_found(record_id), "change team DRI".into());
            return;
        };
        let members = &self.config.team_members;
        if members.is_empty() {
            return;
        }
        let len = members.len() as isize;
        let next = match members.iter().position(|m| *m == current) {
            Some(i) => (i as isize + direction).rem_euclid(len) as usize,
            None => 0,
        };
        let value = members[next].clone();
        self.update_field(record_id, EditableField::TeamDri, &value);
    }

    pub fn update_field(&mut self, record_id: &str, field: EditableField, value: &str) {
        let result = self.dashboard.update_field(record_id, field, value);
        // An edit can drop the record out of an active search.
        self.clamp_cursor();
        match result {
            Ok(entry) => self.set_status(format!(
                "{}: {} → {}",
                entry.field, entry.old_value, entry.new_value
            )),
            Err(e) => self.report(e, format!("update {field} on {record_id}")),
        }
    }

    /// Open a text prompt, pre-filling the buffer where it helps.
    pub fn begin_input(&mut self, purpose: InputPurpose) {
        self.input = match &purpose {
            InputPurpose::Search => self.dashboard.filter().search_query.clone(),
            InputPurpose::EditComment {
                record_id,
                comment_id,
            } => self
                .dashboard
                .record(record_id)
                .and_then(|r| r.comment(comment_id))
                .map(|c| c.comment.clone())
                .unwrap_or_default(),
            InputPurpose::EditNotes { record_id } => self
                .dashboard
                .record(record_id)
                .map(|r| r.notes.clone())
                .unwrap_or_default(),
            InputPurpose::ImportPath => self.config.export_path.display().to_string(),
            InputPurpose::AddComment { .. } => String::new(),
        };
        self.push_overlay(Overlay::Input(purpose));
    }

    /// Finish the prompt on top of the stack with the current buffer.
    pub fn submit_input(&mut self) {
        let Some(Overlay::Input(purpose)) = self.overlays.last().cloned() else {
            return;
        };
        let text = std::mem::take(&mut self.input);
        self.pop_overlay();
        match purpose {
            InputPurpose::Search => self.set_search(&text),
            InputPurpose::AddComment { record_id } => {
                self.add_comment(&record_id, &text);
            }
            InputPurpose::EditComment {
                record_id,
                comment_id,
            } => self.edit_comment(&record_id, &comment_id, &text),
            InputPurpose::EditNotes { record_id } => {
                self.update_field(&record_id, EditableField::Notes, &text)
            }
            InputPurpose::ImportPath => {
                let path = PathBuf::from(text.trim());
                self.import(&path);
            }
        }
    }

    pub fn cancel_input(&mut self) {
        if let Some(Overlay::Input(_)) = self.overlays.last() {
            self.pop_overlay();
            self.input.clear();
        }
    }

    // ── Import / export ──────────────────────────────────────────────

    /// Export the visible records to the configured path.
    pub fn export(&mut self) {
        let path = self.config.export_path.clone();
        match csv_io::export_to_path(self.dashboard.visible_records(), &path) {
            Ok(rows) => {
                self.data.last_export = Some((path.clone(), rows));
                self.set_status(format!("Exported {rows} radars to {}", path.display()));
            }
            Err(e) => self.report(e, format!("export to {}", path.display())),
        }
    }

    /// Replace the data set from a CSV file. On error nothing changes.
    pub fn import(&mut self, path: &Path) {
        match csv_io::import_from_path(path, self.dashboard.catalog()) {
            Ok(records) => {
                let count = records.len();
                self.dashboard.replace_all(records);
                self.table.cursor = 0;
                self.data.last_import = Some((path.to_path_buf(), count));
                self.set_status("Data imported successfully");
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "import failed");
                self.push_error(
                    ErrorCategory::Import,
                    format!("Import failed: {e}"),
                    path.display().to_string(),
                );
            }
        }
    }

    // ── Statistics ───────────────────────────────────────────────────

    pub fn stats_summary(&self) -> StatsSummary {
        let now = chrono::Local::now().naive_local();
        StatsSummary::compute(self.dashboard.visible_records(), self.stats.time_range, now)
    }

    /// Records of the visible list with `status`, inside the stats window.
    pub fn drill_down(&self, status: Status) -> Vec<&Record> {
        let now = chrono::Local::now().naive_local();
        let range = self.stats.time_range;
        radar_core::stats::drill_down(
            self.dashboard
                .visible_records()
                .filter(|r| range.includes(r, now)),
            status,
        )
    }

    pub fn cycle_time_range(&mut self) {
        self.stats.time_range = self.stats.time_range.next();
        let msg = format!("Time range: {}", self.stats.time_range.label());
        self.set_status(msg);
    }

    pub fn refresh_stats(&mut self) {
        self.set_status("Statistics refreshed");
    }

    pub fn open_drill_down(&mut self) {
        if let Some(status) = Status::from_index(self.stats.cursor) {
            self.push_overlay(Overlay::StatusDetail { status, page: 0 });
        }
    }

    // ── Messages ─────────────────────────────────────────────────────

    /// Route a core error to the right category and surface it.
    pub fn report(&mut self, err: RadarError, context: String) {
        let category = match &err {
            RadarError::NotFound { .. } => ErrorCategory::Lookup,
            RadarError::Validation(_) => ErrorCategory::Validation,
            RadarError::MalformedInput { .. } => ErrorCategory::Import,
            _ => ErrorCategory::Other,
        };
        if category == ErrorCategory::Validation {
            self.set_warning(err.to_string());
            return;
        }
        warn!(%context, error = %err, "operation failed");
        let message = err.to_string();
        self.push_error(category, message.clone(), context);
        // Lookup misses stay in the history but read as a warning.
        if category == ErrorCategory::Lookup {
            self.set_warning(message);
        }
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_app;

    #[test]
    fn view_cycle() {
        assert_eq!(View::Main.next(), View::Stats);
        assert_eq!(View::Data.next(), View::Main);
        assert_eq!(View::Main.prev(), View::Data);
        for v in View::ALL {
            assert_eq!(View::from_index(v.index()), Some(v));
        }
        assert!(View::from_index(3).is_none());
    }

    #[test]
    fn row_spacing_cycle() {
        assert_eq!(RowSpacing::Dense.next(), RowSpacing::Normal);
        assert_eq!(RowSpacing::Loose.next(), RowSpacing::Dense);
        assert_eq!(RowSpacing::Dense.prev(), RowSpacing::Loose);
        assert_eq!(RowSpacing::Normal.row_height(), 2);
    }

    #[test]
    fn error_history_caps_at_50() {
        let mut app = test_app();
        for i in 0..60 {
            app.push_error(ErrorCategory::Other, format!("error {i}"), String::new());
        }
        assert_eq!(app.error_history.len(), 50);
        assert!(app.error_history[0].message.contains("59"));
    }

    #[test]
    fn pagination_over_twenty_records() {
        let mut app = test_app();
        assert_eq!(app.page_count(), 2);
        assert_eq!(app.page_range(), 0..15);
        app.next_page();
        assert_eq!(app.table.cursor, 15);
        assert_eq!(app.page_range(), 15..20);
        app.next_page();
        assert_eq!(app.table.cursor, 19);
        app.prev_page();
        assert_eq!(app.table.cursor, 0);
    }

    #[test]
    fn cursor_clamps() {
        let mut app = test_app();
        app.move_cursor(-5);
        assert_eq!(app.table.cursor, 0);
        app.move_cursor(100);
        assert_eq!(app.table.cursor, 19);
    }

    #[test]
    fn chips_cover_statuses_then_tags() {
        let app = test_app();
        let chips = app.chips();
        assert_eq!(chips.len(), 8);
        assert_eq!(chips[0], Chip::Status(Status::InProgress));
        assert_eq!(chips[3], Chip::Tag("High Priority".into()));
    }

    #[test]
    fn chip_toggle_on_and_off() {
        let mut app = test_app();
        let chip = Chip::Tag("Bug".into());
        app.toggle_chip(&chip);
        assert!(app.is_chip_active(&chip));
        app.toggle_chip(&chip);
        assert!(!app.is_chip_active(&chip));
        assert_eq!(app.dashboard.visible_len(), 20);
    }

    #[test]
    fn project_cycle_notifies() {
        let mut app = test_app();
        app.cycle_project();
        assert_eq!(app.current_project(), "Project B");
        assert_eq!(
            app.status_message,
            Some(("Switched to Project B".into(), StatusLevel::Info))
        );
    }

    #[test]
    fn delete_closes_related_overlays() {
        let mut app = test_app();
        app.open_cursor_record();
        app.request_delete("radr://1".into());
        app.confirm_delete("radr://1");
        assert!(app.overlays.is_empty());
        assert_eq!(app.dashboard.len(), 19);
        assert_eq!(
            app.status_message.as_ref().map(|(m, _)| m.as_str()),
            Some("Radar radr://1 has been removed")
        );
    }

    #[test]
    fn delete_at_end_clamps_cursor() {
        let mut app = test_app();
        app.move_cursor(19);
        app.confirm_delete("radr://20");
        assert_eq!(app.table.cursor, 18);
    }

    #[test]
    fn team_dri_cycles_through_members() {
        let mut app = test_app();
        // radr://1 starts on Person B
        app.cycle_team_dri("radr://1", 1);
        assert_eq!(app.dashboard.record("radr://1").unwrap().team_dri, "Person C");
        app.cycle_team_dri("radr://1", -2);
        assert_eq!(app.dashboard.record("radr://1").unwrap().team_dri, "Person A");
        assert_eq!(app.dashboard.record("radr://1").unwrap().history.len(), 2);
    }

    #[test]
    fn unknown_record_goes_to_error_history() {
        let mut app = test_app();
        app.add_comment("radr://404", "hello");
        assert_eq!(app.error_history.len(), 1);
        assert_eq!(app.error_history[0].category, ErrorCategory::Lookup);
        assert!(matches!(
            &app.status_message,
            Some((msg, StatusLevel::Warning)) if msg.contains("radr://404")
        ));
    }

    #[test]
    fn import_failure_is_an_error_in_status_bar() {
        let mut app = test_app();
        app.report(RadarError::malformed(3, "empty id"), "import".into());
        assert_eq!(app.error_history[0].category, ErrorCategory::Import);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Error))));
    }

    #[test]
    fn blank_comment_is_a_warning_only() {
        let mut app = test_app();
        app.add_comment("radr://1", "  ");
        assert!(app.error_history.is_empty());
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
    }

    #[test]
    fn search_prompt_prefills_and_submits() {
        let mut app = test_app();
        app.begin_input(InputPurpose::Search);
        app.input.push_str("person 3");
        app.submit_input();
        assert!(app.overlays.is_empty());
        assert_eq!(app.dashboard.visible_len(), 1);

        app.begin_input(InputPurpose::Search);
        assert_eq!(app.input, "person 3");
        app.cancel_input();
        assert!(app.input.is_empty());
    }

    #[test]
    fn hidden_columns_toggle() {
        let mut app = test_app();
        app.toggle_column(Column::Tags);
        assert_eq!(app.visible_columns().len(), 6);
        app.toggle_column(Column::Tags);
        assert_eq!(app.visible_columns().len(), 7);
    }

    #[test]
    fn drill_down_counts_match_summary() {
        let app = test_app();
        let summary = app.stats_summary();
        for (status, count) in summary.by_status {
            assert_eq!(app.drill_down(status).len(), count);
        }
    }
}

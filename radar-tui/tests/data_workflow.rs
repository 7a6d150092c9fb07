//! Export and import through the app, as the Data Management view drives them.

use std::path::PathBuf;

use radar_core::domain::Status;
use radar_core::DashboardConfig;
use radar_tui::app::{AppState, ErrorCategory, StatusLevel};

fn app_exporting_to(path: PathBuf) -> AppState {
    let mut config = DashboardConfig::default();
    config.sample.seed = Some(5);
    config.export_path = path;
    AppState::with_sample_data(config)
}

#[test]
fn export_then_import_visible_subset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("radar_data.csv");
    let mut app = app_exporting_to(path.clone());

    app.dashboard.toggle_status(Status::OnHold);
    let visible = app.dashboard.visible_len();
    app.export();
    assert_eq!(app.data.last_export, Some((path.clone(), visible)));

    app.dashboard.clear_filters();
    app.import(&path);
    assert_eq!(app.dashboard.len(), visible);
    assert_eq!(app.dashboard.visible_len(), visible);
    assert_eq!(
        app.status_message,
        Some(("Data imported successfully".into(), StatusLevel::Info))
    );
}

#[test]
fn failed_import_keeps_data_and_records_error() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.csv");
    std::fs::write(&bad, "id,title,status\nradr://1,x,Bogus\n").unwrap();

    let mut app = app_exporting_to(dir.path().join("out.csv"));
    app.import(&bad);

    assert_eq!(app.dashboard.len(), 20);
    assert_eq!(app.error_history.len(), 1);
    assert_eq!(app.error_history[0].category, ErrorCategory::Import);
    assert!(app.data.last_import.is_none());
}

#[test]
fn missing_import_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_exporting_to(dir.path().join("out.csv"));
    app.import(&dir.path().join("missing.csv"));
    assert_eq!(app.dashboard.len(), 20);
    assert!(matches!(app.status_message, Some((_, StatusLevel::Error))));
}

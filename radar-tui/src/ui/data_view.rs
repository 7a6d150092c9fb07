//! View 3 — Data Management: CSV export of the visible list, CSV import.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use radar_core::csv_io::COLUMNS;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let d = &app.data;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("Data set", theme::accent_bold())));
    field(
        &mut lines,
        "Records",
        format!(
            "{} loaded, {} visible",
            app.dashboard.len(),
            app.dashboard.visible_len()
        ),
    );
    field(
        &mut lines,
        "Export path",
        app.config.export_path.display().to_string(),
    );
    field(&mut lines, "CSV columns", COLUMNS.join(","));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Export", theme::accent_bold())));
    lines.push(Line::from(Span::styled(
        "  [x] Export the visible radars (current filters apply)",
        theme::muted(),
    )));
    match &d.last_export {
        Some((path, rows)) => field(
            &mut lines,
            "Last export",
            format!("{rows} rows → {}", path.display()),
        ),
        None => field(&mut lines, "Last export", "none this session".into()),
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Import", theme::accent_bold())));
    lines.push(Line::from(Span::styled(
        "  [i] Replace all radars from a CSV file (filters reset)",
        theme::muted(),
    )));
    match &d.last_import {
        Some((path, rows)) => field(
            &mut lines,
            "Last import",
            format!("{rows} rows ← {}", path.display()),
        ),
        None => field(&mut lines, "Last import", "none this session".into()),
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn field(lines: &mut Vec<Line<'static>>, label: &str, value: String) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {label:<14}"), theme::muted()),
        Span::styled(value, theme::text()),
    ]));
}

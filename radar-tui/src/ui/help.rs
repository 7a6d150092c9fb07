//! Help overlay: keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect) {
    let popup = centered_rect(80, 90, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global");
    key(&mut lines, "1-3", "Switch view by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle views forward / back");
    key(&mut lines, "p", "Switch project");
    key(&mut lines, "e", "Error history");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "View 1 - Main");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "n / b", "Next / previous page");
    key(&mut lines, "/", "Search (filters as you type)");
    key(&mut lines, "[ / ]", "Move between filter chips");
    key(&mut lines, "Space", "Toggle focused status or tag filter");
    key(&mut lines, "x", "Clear all filters");
    key(&mut lines, "Enter", "Open radar details");
    key(&mut lines, "d", "Delete radar (asks first)");
    key(&mut lines, "o", "Row spacing and column settings");
    lines.push(Line::from(""));

    section(&mut lines, "Radar details");
    key(&mut lines, "j / k", "Select comment");
    key(&mut lines, "a / e", "Add / edit comment");
    key(&mut lines, "t / T", "Next / previous team DRI");
    key(&mut lines, "n", "Edit notes");
    key(&mut lines, "d", "Delete radar");
    lines.push(Line::from(""));

    section(&mut lines, "View 2 - Statistics");
    key(&mut lines, "j / k", "Select status");
    key(&mut lines, "Enter", "Drill down into status");
    key(&mut lines, "r", "Cycle time range");
    key(&mut lines, "R", "Refresh");
    lines.push(Line::from(""));

    section(&mut lines, "View 3 - Data Management");
    key(&mut lines, "x", "Export visible radars to CSV");
    key(&mut lines, "i", "Import radars from CSV");

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}

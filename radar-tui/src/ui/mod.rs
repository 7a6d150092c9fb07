//! Top-level UI layout — header tabs, active view, status bar, overlays.

pub mod data_view;
pub mod help;
pub mod main_view;
pub mod overlays;
pub mod stats_view;
pub mod status_bar;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use crate::app::{AppState, Overlay, View};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: 1-line header + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header_area = chunks[0];
    let main_area = chunks[1];
    let status_area = chunks[2];

    draw_header(f, header_area, app);
    draw_view(f, main_area, app);
    status_bar::render(f, status_area, app);

    // Overlays stack bottom to top.
    for overlay in &app.overlays {
        match overlay {
            Overlay::Welcome => overlays::render_welcome(f, main_area),
            Overlay::Help => help::render(f, main_area),
            Overlay::ErrorHistory => overlays::render_error_history(f, main_area, app),
            Overlay::Settings { cursor } => overlays::render_settings(f, main_area, app, *cursor),
            Overlay::Record { id, comment_cursor } => {
                overlays::render_record(f, main_area, app, id, *comment_cursor)
            }
            Overlay::ConfirmDelete { id } => overlays::render_confirm_delete(f, main_area, id),
            Overlay::Input(purpose) => overlays::render_input(f, main_area, purpose, &app.input),
            Overlay::StatusDetail { status, page } => {
                overlays::render_status_detail(f, main_area, app, *status, *page)
            }
        }
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(area);

    let titles: Vec<Line> = View::ALL
        .iter()
        .map(|v| Line::from(format!("{} {}", v.index() + 1, v.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.view.index())
        .style(theme::muted())
        .highlight_style(theme::accent_bold())
        .divider("|");
    f.render_widget(tabs, chunks[0]);

    let project = Line::from(vec![
        Span::styled("[p] ", theme::muted()),
        Span::styled(app.current_project().to_string(), theme::accent()),
    ])
    .right_aligned();
    f.render_widget(project, chunks[1]);
}

/// Draw the active view with its border.
fn draw_view(f: &mut Frame, area: Rect, app: &AppState) {
    let view = app.view;
    let is_active = app.overlays.is_empty();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(is_active))
        .title(format!(" {} [{}] ", view.label(), view.index() + 1))
        .title_style(theme::panel_title(is_active));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match view {
        View::Main => main_view::render(f, inner, app),
        View::Stats => stats_view::render(f, inner, app),
        View::Data => data_view::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Truncate to `max` characters, marking the cut with a trailing dot.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max == 0 {
        String::new()
    } else {
        let head: String = s.chars().take(max - 1).collect();
        format!("{head}.")
    }
}

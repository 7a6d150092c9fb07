//! Row of count cards: total plus one per status.
//!
//! Cards always count the full record set so they stay stable while
//! filtering. The card of the active status filter is highlighted.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use radar_core::stats::status_counts;

use crate::app::AppState;
use crate::theme;

pub const HEIGHT: u16 = 4;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let records = app.dashboard.records();
    let counts = status_counts(records);
    let active = app.dashboard.filter().status_filter;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    card(f, cols[0], "Total Radars", records.len(), theme::accent(), false);
    for (i, (status, count)) in counts.into_iter().enumerate() {
        card(
            f,
            cols[i + 1],
            status.label(),
            count,
            theme::status_style(status),
            active == Some(status),
        );
    }
}

fn card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    count: usize,
    style: Style,
    active: bool,
) {
    let border = if active {
        style.add_modifier(Modifier::BOLD)
    } else {
        theme::muted()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {title} "))
        .title_style(if active { style.add_modifier(Modifier::BOLD) } else { style });

    let value = Paragraph::new(Line::from(Span::styled(
        count.to_string(),
        style.add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(value, area);
}

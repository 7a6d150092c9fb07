//! View 1 — Main: stat cards, search, filter chips and the radar table.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use radar_core::domain::Record;

use crate::app::{AppState, Column};
use crate::theme;
use crate::ui::widgets::{chips, stat_cards};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(stat_cards::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    stat_cards::render(f, chunks[0], app);
    f.render_widget(search_line(app), chunks[1]);
    f.render_widget(Paragraph::new(chips::line(app, true)), chunks[2]);
    render_table(f, chunks[3], app);
    f.render_widget(footer(app), chunks[4]);
}

fn search_line(app: &AppState) -> Paragraph<'static> {
    let query = &app.dashboard.filter().search_query;
    let text = if query.is_empty() {
        Span::styled("press / to search id, title, DRI, status, notes", theme::muted())
    } else {
        Span::styled(query.clone(), theme::accent_bold())
    };
    Paragraph::new(Line::from(vec![Span::styled("Search: ", theme::muted()), text]))
}

fn footer(app: &AppState) -> Paragraph<'static> {
    let range = app.page_range();
    let shown = if range.is_empty() {
        "0".to_string()
    } else {
        format!("{}-{}", range.start + 1, range.end)
    };
    Paragraph::new(Line::from(vec![
        Span::styled(
            format!(
                "Page {}/{} | {shown} of {} ",
                app.page() + 1,
                app.page_count(),
                app.dashboard.visible_len()
            ),
            theme::accent(),
        ),
        Span::styled(
            "[j/k]move [n/b]page [/]search [[ ]]chip [Space]toggle [x]clear [Enter]detail [d]elete [o]settings",
            theme::muted(),
        ),
    ]))
}

fn render_table(f: &mut Frame, area: Rect, app: &AppState) {
    let columns = app.visible_columns();
    if app.dashboard.visible_len() == 0 {
        let msg = if app.dashboard.is_empty() {
            "No radars loaded. Import a CSV from the Data Management view (3)."
        } else {
            "No radars match the current filters. Press x to clear them."
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(msg, theme::muted()))),
            area,
        );
        return;
    }

    let header = Row::new(columns.iter().map(|c| Cell::from(c.label())))
        .style(theme::accent_bold())
        .bottom_margin(0);

    let height = app.row_spacing.row_height();
    let range = app.page_range();
    let rows: Vec<Row> = range
        .clone()
        .filter_map(|n| app.dashboard.visible_record(n))
        .map(|record| {
            Row::new(columns.iter().map(|c| cell(record, *c)))
                .height(height)
                .style(theme::text())
        })
        .collect();

    let widths: Vec<Constraint> = columns.iter().map(|c| width(*c)).collect();
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(theme::selected());

    let mut state = TableState::default().with_selected(Some(app.table.cursor.saturating_sub(range.start)));
    f.render_stateful_widget(table, area, &mut state);
}

fn width(column: Column) -> Constraint {
    match column {
        Column::Id => Constraint::Length(11),
        Column::Title => Constraint::Min(16),
        Column::Dri => Constraint::Length(11),
        Column::TeamDri => Constraint::Length(10),
        Column::Status => Constraint::Length(11),
        Column::Tags => Constraint::Min(18),
        Column::Comments => Constraint::Min(20),
    }
}

fn cell(record: &Record, column: Column) -> Cell<'_> {
    match column {
        Column::Id => Cell::from(record.id.as_str()),
        Column::Title => Cell::from(record.title.as_str()),
        Column::Dri => Cell::from(record.dri.as_str()),
        Column::TeamDri => Cell::from(record.team_dri.as_str()),
        Column::Status => Cell::from(Span::styled(
            record.status.label(),
            theme::status_style(record.status),
        )),
        Column::Tags => {
            let mut spans = Vec::new();
            for (i, tag) in record.tags.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(
                    format!("[{}]", tag.text),
                    theme::tag_style(&tag.style),
                ));
            }
            Cell::from(Line::from(spans))
        }
        Column::Comments => {
            let n = record.comments_history.len();
            let label = if n == 1 {
                "1 comment".to_string()
            } else {
                format!("{n} comments")
            };
            Cell::from(Span::styled(label, theme::muted()))
        }
    }
}

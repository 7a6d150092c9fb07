//! View 2 — Statistics: stat cards over the full list, then status
//! distribution and tag counts over the visible list narrowed by a time
//! window. Enter drills into a status.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use radar_core::domain::TagCatalog;
use radar_core::stats::StatsSummary;

use super::widgets::stat_cards;
use crate::app::AppState;
use crate::theme;

const BAR_WIDTH: usize = 30;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let summary = app.stats_summary();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(stat_cards::HEIGHT),
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    stat_cards::render(f, rows[0], app);
    f.render_widget(header(app, &summary), rows[1]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    render_status_distribution(f, cols[0], app, &summary);
    render_tag_chart(f, cols[1], app.dashboard.catalog(), &summary);

    f.render_widget(
        Paragraph::new(Span::styled(
            "[j/k]select status [Enter]drill down [r]time range [R]refresh",
            theme::muted(),
        )),
        rows[3],
    );
}

fn header(app: &AppState, summary: &StatsSummary) -> Paragraph<'static> {
    let filtered = if app.dashboard.filter().is_active() {
        " (filtered)"
    } else {
        ""
    };
    Paragraph::new(Line::from(vec![
        Span::styled("Time range: ", theme::muted()),
        Span::styled(app.stats.time_range.label(), theme::accent_bold()),
        Span::styled(" | ", theme::muted()),
        Span::styled(format!("{} radars{filtered}", summary.total), theme::accent()),
    ]))
}

fn render_status_distribution(f: &mut Frame, area: Rect, app: &AppState, summary: &StatsSummary) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Status Distribution ")
        .title_style(theme::accent_bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, (status, count)) in summary.by_status.iter().enumerate() {
        let pct = summary.status_percent(*status);
        let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
        let is_cursor = i == app.stats.cursor;
        let label_style = if is_cursor {
            theme::selected()
        } else {
            theme::status_style(*status)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", status.label()), label_style),
            Span::styled(format!("{:>4} ", count), theme::text()),
            Span::styled(format!("{pct:>5.1}% "), theme::muted()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("█".repeat(filled), theme::status_style(*status)),
            Span::styled(
                "░".repeat(BAR_WIDTH.saturating_sub(filled)),
                theme::muted().add_modifier(Modifier::DIM),
            ),
        ]));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Bar colour for a tag, taken from its catalog style.
fn tag_bar_style(catalog: &TagCatalog, tag: &str) -> Style {
    theme::tag_style(catalog.style_for(tag))
}

fn render_tag_chart(f: &mut Frame, area: Rect, catalog: &TagCatalog, summary: &StatsSummary) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Tags ")
        .title_style(theme::accent_bold());

    if summary.by_tag.is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(
            Paragraph::new(Span::styled("No tags in range.", theme::muted())),
            inner,
        );
        return;
    }

    let bars: Vec<Bar> = summary
        .by_tag
        .iter()
        .map(|(tag, count)| {
            let style = tag_bar_style(catalog, tag);
            Bar::default()
                .value(*count as u64)
                .label(Line::from(tag.clone()))
                .style(style)
                .value_style(style.add_modifier(Modifier::BOLD | Modifier::REVERSED))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1);
    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;
    use ratatui::Terminal;

    #[test]
    fn tag_bars_take_catalog_colour() {
        let catalog = TagCatalog::default();
        assert_eq!(tag_bar_style(&catalog, "Bug").fg, Some(Color::Rgb(255, 215, 0)));
        assert_eq!(
            tag_bar_style(&catalog, "Feature").fg,
            Some(Color::Rgb(147, 112, 219))
        );
    }

    #[test]
    fn tag_chart_paints_each_bar_in_its_tag_colour() {
        let catalog = TagCatalog::default();
        let summary = StatsSummary {
            total: 5,
            by_status: [
                (radar_core::domain::Status::InProgress, 5),
                (radar_core::domain::Status::Completed, 0),
                (radar_core::domain::Status::OnHold, 0),
            ],
            by_tag: vec![("Bug".into(), 3), ("Feature".into(), 2)],
        };

        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|f| render_tag_chart(f, f.area(), &catalog, &summary))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let has_fg = |color: Color| {
            (0..buffer.area.height)
                .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
                .any(|pos| buffer[pos].fg == color)
        };
        assert!(has_fg(Color::Rgb(255, 215, 0)));
        assert!(has_fg(Color::Rgb(147, 112, 219)));
    }
}

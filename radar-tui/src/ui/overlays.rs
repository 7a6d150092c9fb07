//! Overlay widgets — welcome, record detail, prompts, confirmations,
//! drill-down, settings and error history.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use radar_core::domain::{Record, Status};

use crate::app::{AppState, Column, InputPurpose};
use crate::theme;
use crate::ui::{centered_rect, truncate};

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to Radar Tracker ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Press / to search, Space to toggle filters",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Press Enter on a radar to comment or edit it",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Press 2 for statistics, 3 to export or import CSV",
            theme::muted(),
        )),
        Line::from(Span::styled("  4. Press ? for every shortcut", theme::muted())),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Error history overlay.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(format!(
            " Error History ({}) [Esc]close [j/k]scroll ",
            app.error_history.len()
        ))
        .title_style(theme::negative());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        let text = Paragraph::new(Span::styled("No errors recorded.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, err) in app.error_history.iter().enumerate().skip(app.error_scroll) {
        let style = if i == app.error_scroll {
            theme::negative().add_modifier(Modifier::BOLD)
        } else {
            theme::muted()
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", err.timestamp.format("%H:%M:%S")),
                theme::muted(),
            ),
            Span::styled(format!("[{}] ", err.category.label()), theme::warning()),
            Span::styled(err.message.as_str(), style),
        ]));
        if !err.context.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(err.context.as_str(), theme::muted()),
            ]));
        }
        if lines.len() >= inner.height as usize {
            break;
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Row spacing and column visibility.
pub fn render_settings(f: &mut Frame, area: Rect, app: &AppState, cursor: usize) {
    let popup = centered_rect(50, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Table Settings [j/k]move [Space]toggle [Esc]close ")
        .title_style(theme::accent_bold());

    let row_style = |i: usize| {
        if i == cursor {
            theme::selected()
        } else {
            theme::text()
        }
    };

    let mut lines = vec![
        Line::from(Span::styled("Row spacing", theme::accent_bold())),
        Line::from(Span::styled(
            format!("  < {} >", app.row_spacing.label()),
            row_style(0),
        )),
        Line::from(""),
        Line::from(Span::styled("Columns", theme::accent_bold())),
    ];
    for (i, column) in Column::ALL.iter().enumerate() {
        let mark = if app.hidden_columns.contains(column) {
            "[ ]"
        } else {
            "[x]"
        };
        lines.push(Line::from(Span::styled(
            format!("  {mark} {}", column.label()),
            row_style(i + 1),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Full record: fields, audit trail and comments.
pub fn render_record(f: &mut Frame, area: Rect, app: &AppState, id: &str, comment_cursor: usize) {
    let popup = centered_rect(85, 85, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" {id} [a]dd [e]dit comment [t/T]team DRI [n]otes [d]elete [Esc]close "))
        .title_style(theme::accent_bold());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let Some(record) = app.dashboard.record(id) else {
        f.render_widget(
            Paragraph::new(Span::styled("Radar not found.", theme::muted())),
            inner,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3)])
        .split(inner);

    f.render_widget(
        Paragraph::new(field_lines(record)).wrap(Wrap { trim: false }),
        chunks[0],
    );
    f.render_widget(comment_list(record, comment_cursor, chunks[1]), chunks[1]);
}

fn field_lines(record: &Record) -> Vec<Line<'_>> {
    let tags: Vec<Span> = record
        .tags
        .iter()
        .flat_map(|t| {
            [
                Span::styled(format!("[{}]", t.text), theme::tag_style(&t.style)),
                Span::raw(" "),
            ]
        })
        .collect();
    let last_change = record
        .history
        .last()
        .map(|h| format!("{} {}: {} → {}", h.timestamp, h.field, h.old_value, h.new_value))
        .unwrap_or_else(|| "no edits".into());

    let mut lines = vec![
        detail("Title", Span::styled(record.title.as_str(), theme::text())),
        detail("Current DRI", Span::raw(record.dri.as_str())),
        detail("Team DRI", Span::styled(record.team_dri.as_str(), theme::accent())),
        detail(
            "Status",
            Span::styled(record.status.label(), theme::status_style(record.status)),
        ),
    ];
    let mut tag_line = vec![Span::styled(format!("{:<13}", "Tags"), theme::muted())];
    tag_line.extend(tags);
    lines.push(Line::from(tag_line));
    lines.push(detail(
        "Notes",
        if record.notes.is_empty() {
            Span::styled("(none)", theme::muted())
        } else {
            Span::raw(record.notes.as_str())
        },
    ));
    lines.push(detail(
        "History",
        Span::styled(
            format!("{} entries, last: {last_change}", record.history.len()),
            theme::muted(),
        ),
    ));
    lines
}

fn detail<'a>(label: &str, value: Span<'a>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<13}"), theme::muted()),
        value,
    ])
}

const COMMENT_INDENT: &str = "    ";

/// Comment thread, scrolled so the cursor entry stays on screen.
fn comment_list(record: &Record, cursor: usize, area: Rect) -> Paragraph<'_> {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::muted())
        .title(format!(" Comments ({}) ", record.comments_history.len()))
        .title_style(theme::accent_bold());

    if record.comments_history.is_empty() {
        return Paragraph::new(Span::styled("No comments yet. Press a to add one.", theme::muted()))
            .block(block);
    }

    let body_width = (area.width as usize).saturating_sub(COMMENT_INDENT.len()).max(1);
    let (lines, starts) = comment_lines(record, cursor, body_width);
    let offset = comment_scroll(&starts, lines.len(), cursor, area.height.saturating_sub(1));
    Paragraph::new(lines).block(block).scroll((offset, 0))
}

/// One row per `Line`: bodies are hard-wrapped to `body_width` here so row
/// offsets are exact. Also returns the first row of each comment.
fn comment_lines(record: &Record, cursor: usize, body_width: usize) -> (Vec<Line<'_>>, Vec<usize>) {
    let mut lines: Vec<Line> = Vec::new();
    let mut starts = Vec::with_capacity(record.comments_history.len());
    for (i, c) in record.comments_history.iter().enumerate() {
        starts.push(lines.len());
        let selected = i == cursor;
        let marker = if selected { "▶ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, theme::accent()),
            Span::styled(c.timestamp.as_str(), theme::muted()),
            Span::styled(" by ", theme::muted()),
            Span::styled(c.author.as_str(), theme::accent_bold()),
        ]));
        let body = if selected {
            theme::text().add_modifier(Modifier::BOLD)
        } else {
            theme::text()
        };
        for text_line in c.comment.lines() {
            for chunk in wrap_chars(text_line, body_width) {
                lines.push(Line::from(vec![
                    Span::raw(COMMENT_INDENT),
                    Span::styled(chunk, body),
                ]));
            }
        }
    }
    (lines, starts)
}

/// Split a line into pieces of at most `width` chars. Empty input gives one
/// empty piece.
fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width.max(1))
        .map(|c| c.iter().collect())
        .collect()
}

/// Rows to scroll so the cursor entry is visible: the whole entry when it
/// fits, otherwise its header at the top.
fn comment_scroll(starts: &[usize], total_rows: usize, cursor: usize, height: u16) -> u16 {
    let Some(&start) = starts.get(cursor) else {
        return 0;
    };
    let end = starts.get(cursor + 1).copied().unwrap_or(total_rows);
    let offset = end.saturating_sub(height as usize).min(start);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Delete confirmation.
pub fn render_confirm_delete(f: &mut Frame, area: Rect, id: &str) {
    let popup = centered_rect(50, 20, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(" Delete Radar ")
        .title_style(theme::negative().add_modifier(Modifier::BOLD));

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Remove ", theme::text()),
            Span::styled(id.to_string(), theme::accent_bold()),
            Span::styled("? This cannot be undone.", theme::text()),
        ]),
        Line::from(""),
        Line::from(Span::styled("[y]es   [n]o", theme::muted())),
    ];
    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}

/// Single-line text prompt.
pub fn render_input(f: &mut Frame, area: Rect, purpose: &InputPurpose, input: &str) {
    let popup = centered_rect(60, 20, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" {} [Enter]ok [Esc]cancel ", purpose.title()))
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let hint = match purpose {
        InputPurpose::Search => "Filters as you type:".to_string(),
        InputPurpose::AddComment { record_id } => format!("New comment on {record_id}:"),
        InputPurpose::EditComment { comment_id, .. } => format!("Edit {comment_id}:"),
        InputPurpose::EditNotes { record_id } => format!("Notes for {record_id}:"),
        InputPurpose::ImportPath => "CSV file to import:".to_string(),
    };
    let width = inner.width.saturating_sub(3) as usize;
    let shown = if input.chars().count() > width {
        let skip = input.chars().count() - width;
        input.chars().skip(skip).collect()
    } else {
        input.to_string()
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(hint, theme::muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme::accent()),
            Span::styled(shown, theme::accent_bold()),
            Span::styled("_", theme::accent()),
        ]),
    ];
    f.render_widget(Paragraph::new(text), inner);
}

/// Paged list of records with one status.
pub fn render_status_detail(f: &mut Frame, area: Rect, app: &AppState, status: Status, page: usize) {
    let popup = centered_rect(70, 60, area);
    f.render_widget(Clear, popup);

    let records = app.drill_down(status);
    let per_page = app.config.detail_page_size.max(1);
    let pages = records.len().div_ceil(per_page).max(1);
    let page = page.min(pages - 1);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::status_style(status))
        .title(format!(
            " {} ({}) page {}/{} [n/b]page [Esc]close ",
            status.label(),
            records.len(),
            page + 1,
            pages
        ))
        .title_style(theme::status_style(status).add_modifier(Modifier::BOLD));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if records.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No radars with this status.", theme::muted())),
            inner,
        );
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for record in records.iter().skip(page * per_page).take(per_page) {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", record.id), theme::accent()),
            Span::styled(truncate(&record.title, 30), theme::text()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(
                format!("DRI {} | Team {}", record.dri, record.team_dri),
                theme::muted(),
            ),
        ]));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_app;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn scroll_keeps_cursor_entry_in_view() {
        // Three comments of 2, 3 and 2 rows.
        let starts = [0, 2, 5];
        assert_eq!(comment_scroll(&starts, 7, 0, 4), 0);
        assert_eq!(comment_scroll(&starts, 7, 1, 4), 1);
        assert_eq!(comment_scroll(&starts, 7, 2, 4), 3);
        // Entry taller than the view: its header goes to the top.
        assert_eq!(comment_scroll(&starts, 7, 1, 2), 2);
        assert_eq!(comment_scroll(&starts, 7, 9, 4), 0);
    }

    #[test]
    fn long_bodies_are_split_to_width() {
        assert_eq!(wrap_chars("abcdefg", 3), vec!["abc", "def", "g"]);
        assert_eq!(wrap_chars("", 3), vec![String::new()]);
    }

    #[test]
    fn cursor_on_last_of_many_comments_is_visible() {
        let mut app = test_app();
        for n in 0..40 {
            app.dashboard
                .add_comment("radr://1", &format!("note number {n}"))
                .unwrap();
        }
        let last = app.dashboard.record("radr://1").unwrap().comments_history.len() - 1;

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| render_record(f, f.area(), &app, "radr://1", last))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let screen: String = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .map(|pos| buffer[pos].symbol().to_string())
            .collect();
        assert!(screen.contains('▶'));
        assert!(screen.contains("note number 39"));
        assert!(!screen.contains("note number 0 "));
    }
}

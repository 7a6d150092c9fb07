//! Filter chip bar: statuses then catalog tags.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::app::{AppState, Chip};
use crate::theme;

/// One line of chips. `focused` marks the chip under the chip cursor.
pub fn line(app: &AppState, focused: bool) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::styled("Filters: ", theme::muted())];
    for (i, chip) in app.chips().iter().enumerate() {
        let active = app.is_chip_active(chip);
        let (label, base) = match chip {
            Chip::Status(s) => (s.label().to_string(), theme::status_style(*s)),
            Chip::Tag(t) => (
                t.clone(),
                theme::tag_style(app.dashboard.catalog().style_for(t)),
            ),
        };
        let mut style = base;
        if active {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        if focused && i == app.table.chip_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let marker = if active { "●" } else { "○" };
        spans.push(Span::styled(format!("{marker} {label}"), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

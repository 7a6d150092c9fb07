//! Keyboard input dispatch — overlays → global keys → view-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use radar_core::domain::Status;

use crate::app::{AppState, Column, InputPurpose, Overlay, View};

/// Rows in the settings overlay: row spacing, then one per column.
pub const SETTINGS_ROWS: usize = 1 + Column::ALL.len();

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    // 1. The top overlay consumes input first.
    if let Some(overlay) = app.overlay().cloned() {
        match overlay {
            Overlay::Welcome => {
                app.pop_overlay();
            }
            Overlay::Help => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
                    app.pop_overlay();
                }
            }
            Overlay::ErrorHistory => handle_error_overlay(app, key),
            Overlay::Settings { cursor } => handle_settings_overlay(app, key, cursor),
            Overlay::Record { id, comment_cursor } => {
                handle_record_overlay(app, key, id, comment_cursor)
            }
            Overlay::ConfirmDelete { id } => handle_confirm_delete(app, key, &id),
            Overlay::Input(purpose) => handle_input_overlay(app, key, &purpose),
            Overlay::StatusDetail { status, page } => {
                handle_status_detail(app, key, status, page)
            }
        }
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.switch_view(View::Main);
            return;
        }
        KeyCode::Char('2') => {
            app.switch_view(View::Stats);
            return;
        }
        KeyCode::Char('3') => {
            app.switch_view(View::Data);
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.switch_view(app.view.prev());
            } else {
                app.switch_view(app.view.next());
            }
            return;
        }
        KeyCode::BackTab => {
            app.switch_view(app.view.prev());
            return;
        }
        KeyCode::Char('p') => {
            app.cycle_project();
            return;
        }
        KeyCode::Char('?') => {
            app.push_overlay(Overlay::Help);
            return;
        }
        KeyCode::Char('e') => {
            app.error_scroll = 0;
            app.push_overlay(Overlay::ErrorHistory);
            return;
        }
        _ => {}
    }

    // 3. View-specific keys.
    match app.view {
        View::Main => handle_main_key(app, key),
        View::Stats => handle_stats_key(app, key),
        View::Data => handle_data_key(app, key),
    }
}

// ─── Views ──────────────────────────────────────────────────────────

fn handle_main_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('n') | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('b') | KeyCode::PageUp => app.prev_page(),
        KeyCode::Char('g') | KeyCode::Home => app.table.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.table.cursor = app.dashboard.visible_len().saturating_sub(1)
        }
        KeyCode::Char('/') => app.begin_input(InputPurpose::Search),
        KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left => app.move_chip(-1),
        KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right => app.move_chip(1),
        KeyCode::Char(' ') => app.toggle_focused_chip(),
        KeyCode::Char('x') => app.clear_filters(),
        KeyCode::Enter => app.open_cursor_record(),
        KeyCode::Char('d') => {
            if let Some(id) = app.cursor_record().map(|r| r.id.clone()) {
                app.request_delete(id);
            }
        }
        KeyCode::Char('o') => app.push_overlay(Overlay::Settings { cursor: 0 }),
        _ => {}
    }
}

fn handle_stats_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.stats.cursor + 1 < Status::ALL.len() {
                app.stats.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.stats.cursor = app.stats.cursor.saturating_sub(1);
        }
        KeyCode::Enter => app.open_drill_down(),
        KeyCode::Char('r') => app.cycle_time_range(),
        KeyCode::Char('R') => app.refresh_stats(),
        _ => {}
    }
}

fn handle_data_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('x') => app.export(),
        KeyCode::Char('i') => app.begin_input(InputPurpose::ImportPath),
        _ => {}
    }
}

// ─── Overlays ───────────────────────────────────────────────────────

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.pop_overlay();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_settings_overlay(app: &mut AppState, key: KeyEvent, cursor: usize) {
    let mut next_cursor = cursor;
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('o') => {
            app.pop_overlay();
            return;
        }
        KeyCode::Char('j') | KeyCode::Down => next_cursor = (cursor + 1).min(SETTINGS_ROWS - 1),
        KeyCode::Char('k') | KeyCode::Up => next_cursor = cursor.saturating_sub(1),
        KeyCode::Char('h') | KeyCode::Left if cursor == 0 => {
            app.row_spacing = app.row_spacing.prev();
        }
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter
            if cursor == 0 =>
        {
            app.row_spacing = app.row_spacing.next();
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(column) = Column::ALL.get(cursor - 1) {
                app.toggle_column(*column);
            }
        }
        _ => {}
    }
    if let Some(Overlay::Settings { cursor }) = app.overlays.last_mut() {
        *cursor = next_cursor;
    }
}

fn handle_record_overlay(app: &mut AppState, key: KeyEvent, id: String, comment_cursor: usize) {
    let comment_count = app
        .dashboard
        .record(&id)
        .map(|r| r.comments_history.len())
        .unwrap_or(0);
    let mut next_cursor = comment_cursor;

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.pop_overlay();
            return;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if comment_cursor + 1 < comment_count {
                next_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => next_cursor = comment_cursor.saturating_sub(1),
        KeyCode::Char('a') => {
            app.begin_input(InputPurpose::AddComment { record_id: id });
            return;
        }
        KeyCode::Char('e') => {
            let comment_id = app
                .dashboard
                .record(&id)
                .and_then(|r| r.comments_history.get(comment_cursor))
                .map(|c| c.id.clone());
            if let Some(comment_id) = comment_id {
                app.begin_input(InputPurpose::EditComment {
                    record_id: id,
                    comment_id,
                });
            }
            return;
        }
        KeyCode::Char('t') => app.cycle_team_dri(&id, 1),
        KeyCode::Char('T') => app.cycle_team_dri(&id, -1),
        KeyCode::Char('n') => {
            app.begin_input(InputPurpose::EditNotes { record_id: id });
            return;
        }
        KeyCode::Char('d') => {
            app.request_delete(id);
            return;
        }
        _ => {}
    }
    if let Some(Overlay::Record { comment_cursor, .. }) = app.overlays.last_mut() {
        *comment_cursor = next_cursor;
    }
}

fn handle_confirm_delete(app: &mut AppState, key: KeyEvent, id: &str) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete(id),
        KeyCode::Char('n') | KeyCode::Esc | KeyCode::Char('q') => {
            app.pop_overlay();
        }
        _ => {}
    }
}

fn handle_input_overlay(app: &mut AppState, key: KeyEvent, purpose: &InputPurpose) {
    let live = *purpose == InputPurpose::Search;
    match key.code {
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => {
            app.input.pop();
            if live {
                let query = app.input.clone();
                app.set_search(&query);
            }
        }
        KeyCode::Char(c) => {
            app.input.push(c);
            if live {
                let query = app.input.clone();
                app.set_search(&query);
            }
        }
        _ => {}
    }
}

fn handle_status_detail(app: &mut AppState, key: KeyEvent, status: Status, page: usize) {
    let per_page = app.config.detail_page_size.max(1);
    let pages = app.drill_down(status).len().div_ceil(per_page).max(1);
    let next_page = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.pop_overlay();
            return;
        }
        KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right => (page + 1).min(pages - 1),
        KeyCode::Char('b') | KeyCode::Char('h') | KeyCode::Left => page.saturating_sub(1),
        _ => page,
    };
    if let Some(Overlay::StatusDetail { page, .. }) = app.overlays.last_mut() {
        *page = next_page;
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, FlatItem};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.should_quit = true;
        }
        return;
    }

    // Help overlay intercepts everything except its own close keys
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    app.status_message = None;

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Movement
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.cursor_to_bottom(),

        // Expand / collapse
        KeyCode::Char('h') | KeyCode::Left => match app.selected_item() {
            Some(FlatItem::Group { group_id, .. }) => app.set_expanded(group_id, false),
            Some(FlatItem::Task { group_id, .. }) => app.select_group(group_id),
            _ => {}
        },
        KeyCode::Char('l') | KeyCode::Right => {
            if let Some(FlatItem::Group { group_id, .. }) = app.selected_item() {
                app.set_expanded(group_id, true);
            }
        }

        // Row actions
        KeyCode::Enter => match app.selected_item() {
            Some(FlatItem::Group { group_id, .. }) => app.toggle_expanded(group_id),
            Some(FlatItem::Task { .. }) => app.open_edit_selected(),
            _ => {}
        },
        KeyCode::Char(' ') => match app.selected_item() {
            Some(FlatItem::Group { group_id, .. }) => app.toggle_expanded(group_id),
            Some(FlatItem::Task { .. }) => app.toggle_selected_done(),
            _ => {}
        },
        KeyCode::Char('x') => app.toggle_selected_done(),
        KeyCode::Char('e') => app.open_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete_selected(),

        // Create
        KeyCode::Char('n') => app.open_create_group(),
        KeyCode::Char('t') => app.open_create_task(),

        _ => {}
    }
}

mod confirm;
mod dialog;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Dialog};

use confirm::handle_confirm;
use dialog::{handle_group_dialog, handle_task_dialog};
use navigate::handle_navigate;

/// Handle a key event. An open dialog captures all input.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match &app.dialog {
        Some(Dialog::Group(_)) => handle_group_dialog(app, key),
        Some(Dialog::Task(_)) => handle_task_dialog(app, key),
        Some(Dialog::Confirm(_)) => handle_confirm(app, key),
        None => handle_navigate(app, key),
    }
}

/// Bracketed paste goes into whichever text field has focus
pub fn handle_paste(app: &mut App, text: &str) {
    match &mut app.dialog {
        Some(Dialog::Group(form)) => form.paste(text),
        Some(Dialog::Task(form)) => form.paste(text),
        _ => {}
    }
}

/// Plain or shifted character input (what a text field should accept)
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(c)
        }
        _ => None,
    }
}

use crossterm::event::{KeyCode, KeyEvent};

use crate::forms::{FormField, TaskField};
use crate::tui::app::{App, Dialog};

use super::typed_char;

pub(super) fn handle_group_dialog(app: &mut App, key: KeyEvent) {
    let Some(Dialog::Group(form)) = &mut app.dialog else {
        return;
    };

    match key.code {
        KeyCode::Esc => app.dialog = None,
        KeyCode::Enter => {
            let is_edit = form.is_edit();
            if let Ok(group) = form.submit(&mut app.ids) {
                app.dialog = None;
                app.save_group(group, is_edit);
            }
        }
        KeyCode::Backspace => form.backspace(),
        KeyCode::Delete => form.name.delete(),
        KeyCode::Left => form.name.move_left(),
        KeyCode::Right => form.name.move_right(),
        KeyCode::Home => form.name.move_home(),
        KeyCode::End => form.name.move_end(),
        _ => {
            if let Some(c) = typed_char(&key) {
                form.type_char(c);
            }
        }
    }
}

pub(super) fn handle_task_dialog(app: &mut App, key: KeyEvent) {
    let Some(Dialog::Task(form)) = &mut app.dialog else {
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.dialog = None;
            return;
        }
        KeyCode::Enter => {
            let is_edit = form.is_edit();
            match form.submit(&mut app.ids) {
                Ok(task) => {
                    app.dialog = None;
                    app.save_task(task, is_edit);
                }
                // Jump to the field that needs fixing
                Err(e) => {
                    form.focus = match e.field() {
                        FormField::Name => TaskField::Name,
                        FormField::Group => TaskField::Group,
                    }
                }
            }
            return;
        }
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            return;
        }
        _ => {}
    }

    match form.focus {
        TaskField::Name | TaskField::Description => match key.code {
            KeyCode::Backspace => form.backspace(),
            KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End | KeyCode::Delete => {
                if let Some(field) = form.focused_text_mut() {
                    match key.code {
                        KeyCode::Left => field.move_left(),
                        KeyCode::Right => field.move_right(),
                        KeyCode::Home => field.move_home(),
                        KeyCode::End => field.move_end(),
                        _ => field.delete(),
                    }
                }
            }
            _ => {
                if let Some(c) = typed_char(&key) {
                    form.type_char(c);
                }
            }
        },
        TaskField::Difficulty | TaskField::Group => match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => form.cycle_next(),
            KeyCode::Left | KeyCode::Char('h') => form.cycle_prev(),
            _ => {}
        },
        TaskField::Done => {
            if matches!(key.code, KeyCode::Char(' ') | KeyCode::Char('x')) {
                form.toggle_done();
            }
        }
    }
}

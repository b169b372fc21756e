pub mod confirm_popup;
pub mod form_dialog;
pub mod header;
pub mod help_overlay;
pub mod helpers;
pub mod status_row;
pub mod tree_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Dialog};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | tree | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    tree_view::render_tree_view(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    // Dialogs are modal and drawn last
    match &app.dialog {
        Some(Dialog::Group(form)) => form_dialog::render_group_dialog(frame, app, form, area),
        Some(Dialog::Task(form)) => form_dialog::render_task_dialog(frame, app, form, area),
        Some(Dialog::Confirm(prompt)) => {
            confirm_popup::render_confirm_popup(frame, app, prompt, area)
        }
        None => {}
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, FlatItem};

use super::helpers::{key_hint_spans, pad_spans, spans_width};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    if app.show_key_hints {
        let hints = hints_for(app.selected_item());
        let hint_spans = key_hint_spans(
            &hints,
            Style::default().fg(app.theme.highlight).bg(bg),
            Style::default().fg(app.theme.dim).bg(bg),
        );
        let used = spans_width(&spans);
        let hint_width = spans_width(&hint_spans) + 1;
        if used + hint_width < width {
            spans.push(Span::styled(
                " ".repeat(width - used - hint_width),
                Style::default().bg(bg),
            ));
            spans.extend(hint_spans);
        }
    }
    pad_spans(&mut spans, width, bg);

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Hints for whatever row the cursor is on
fn hints_for(item: Option<FlatItem>) -> Vec<(&'static str, &'static str)> {
    match item {
        Some(FlatItem::Group { .. }) => {
            vec![("Enter", "fold"), ("e", "edit"), ("d", "delete"), ("q", "quit")]
        }
        Some(FlatItem::Task { .. }) => vec![
            ("Space", "done"),
            ("e", "edit"),
            ("d", "delete"),
            ("q", "quit"),
        ],
        _ => vec![("q", "quit")],
    }
}

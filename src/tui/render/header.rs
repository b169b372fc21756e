use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{key_hint_spans, pad_spans, spans_width};

/// Render the title row and the separator under it
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(app.theme.highlight).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans = vec![Span::styled(" Task Manager", title_style)];

    // "New Task" is unavailable until a group exists
    let mut hints = vec![("n", "new group")];
    if !app.state.groups.is_empty() {
        hints.push(("t", "new task"));
    }
    hints.push(("?", "help"));
    let hint_spans = key_hint_spans(&hints, key_style, dim_style);

    let used = spans_width(&spans) + spans_width(&hint_spans) + 1;
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        spans.extend(hint_spans);
    }
    pad_spans(&mut spans, width, bg);

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![Line::from(spans), separator])
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

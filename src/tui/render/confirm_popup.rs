use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::forms::ConfirmPrompt;
use crate::tui::app::App;

use super::helpers::{centered_rect_fixed, key_hint_spans};

const POPUP_WIDTH: u16 = 48;

/// Render the yes/no delete prompt
pub fn render_confirm_popup(frame: &mut Frame, app: &App, prompt: &ConfirmPrompt, area: Rect) {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let key_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    // Rough line count for the wrapped message, plus padding and hints
    let inner_w = POPUP_WIDTH.saturating_sub(4) as usize;
    let message_rows = prompt.message.len().div_ceil(inner_w.max(1)) + 1;
    let height = (message_rows + 5) as u16;
    let popup = centered_rect_fixed(POPUP_WIDTH, height, area);
    frame.render_widget(Clear, popup);

    let mut hint = vec![Span::styled(" ", dim_style)];
    hint.extend(key_hint_spans(
        &[("y", "confirm"), ("n", "cancel")],
        key_style,
        dim_style,
    ));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {}", prompt.message), text_style)),
        Line::from(""),
        Line::from(hint),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .title(Span::styled(
            format!(" {} ", prompt.title),
            Style::default()
                .fg(app.theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}

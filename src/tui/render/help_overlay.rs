use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect_fixed;

const OVERLAY_WIDTH: u16 = 50;
const KEY_WIDTH: usize = 16;

const NAVIGATION: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}/jk", "Move cursor up/down"),
    ("g/G", "Jump to top/bottom"),
    ("\u{2190}/h", "Collapse group / go to group"),
    ("\u{2192}/l", "Expand group"),
    ("Enter", "Fold group / edit task"),
];

const EDITING: &[(&str, &str)] = &[
    ("n", "New group"),
    ("t", "New task"),
    ("e", "Edit selected"),
    ("d", "Delete selected"),
    ("Space/x", "Toggle task done"),
];

const GLOBAL: &[(&str, &str)] = &[
    ("?", "Toggle this help"),
    ("q", "Quit"),
    ("Ctrl+C", "Quit (immediate)"),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(" Key Bindings", header_style)),
        Line::from(""),
    ];
    for (title, bindings) in [
        ("Navigation", NAVIGATION),
        ("Editing", EDITING),
        ("Global", GLOBAL),
    ] {
        lines.push(Line::from(Span::styled(format!(" {}", title), header_style)));
        for (key, desc) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<width$}", key, width = KEY_WIDTH), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.pop();

    let height = lines.len() as u16 + 2;
    let overlay_area = centered_rect_fixed(OVERLAY_WIDTH, height, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

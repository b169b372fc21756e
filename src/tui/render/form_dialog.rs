use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::forms::{FormError, GroupForm, TaskField, TaskForm, TextField};
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{centered_rect_fixed, key_hint_spans};

const DIALOG_WIDTH: u16 = 56;
/// Column where field values start
const VALUE_COL: usize = 15;

/// Shared styles for both editors
struct DialogStyles {
    label: Style,
    label_focused: Style,
    value: Style,
    error: Style,
    dim: Style,
    key: Style,
    border: Style,
}

impl DialogStyles {
    fn new(app: &App) -> Self {
        let bg = app.theme.background;
        DialogStyles {
            label: Style::default().fg(app.theme.text).bg(bg),
            label_focused: Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
            value: Style::default().fg(app.theme.text_bright).bg(bg),
            error: Style::default().fg(app.theme.red).bg(bg),
            dim: Style::default().fg(app.theme.dim).bg(bg),
            key: Style::default().fg(app.theme.highlight).bg(bg),
            border: Style::default().fg(app.theme.highlight).bg(bg),
        }
    }

    fn label(&self, focused: bool) -> Style {
        if focused {
            self.label_focused
        } else {
            self.label
        }
    }
}

/// Render the create/edit group dialog
pub fn render_group_dialog(frame: &mut Frame, app: &App, form: &GroupForm, area: Rect) {
    let styles = DialogStyles::new(app);
    let inner_w = DIALOG_WIDTH.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.push(field_line("Group Name", true, &styles));
    let cursor_row = lines.len();
    lines.push(text_value_line(&form.name, inner_w, &styles));
    lines.push(error_line(form.name_error, &styles));
    lines.push(Line::from(""));
    lines.push(hints_line(&styles));

    let popup = render_frame(frame, app, form.title(), lines, area, &styles);
    place_cursor(frame, popup, cursor_row, 2 + form.name.cursor_col());
}

/// Render the create/edit task dialog
pub fn render_task_dialog(frame: &mut Frame, app: &App, form: &TaskForm, area: Rect) {
    let styles = DialogStyles::new(app);
    let inner_w = DIALOG_WIDTH.saturating_sub(2) as usize;
    let value_w = inner_w.saturating_sub(VALUE_COL);

    let mut lines: Vec<Line> = vec![Line::from("")];
    let mut cursor_at = None;

    // Name
    if form.focus == TaskField::Name {
        cursor_at = Some((lines.len(), VALUE_COL + form.name.cursor_col()));
    }
    lines.push(inline_text_line(
        "Name",
        &form.name,
        form.focus == TaskField::Name,
        value_w,
        &styles,
    ));
    lines.push(indented_error_line(form.name_error, &styles));

    // Description
    if form.focus == TaskField::Description {
        cursor_at = Some((lines.len(), VALUE_COL + form.description.cursor_col()));
    }
    lines.push(inline_text_line(
        "Description",
        &form.description,
        form.focus == TaskField::Description,
        value_w,
        &styles,
    ));
    lines.push(Line::from(""));

    // Difficulty
    let difficulty_style = Style::default()
        .fg(app.theme.difficulty_color(form.difficulty))
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD);
    lines.push(picker_line(
        "Difficulty",
        Span::styled(form.difficulty.as_str(), difficulty_style),
        form.focus == TaskField::Difficulty,
        &styles,
    ));
    lines.push(Line::from(""));

    // Group
    let group_name = form.selected_group_name().unwrap_or("(none)");
    lines.push(picker_line(
        "Group",
        Span::styled(
            unicode::truncate_to_width(group_name, value_w.saturating_sub(4)),
            styles.value,
        ),
        form.focus == TaskField::Group,
        &styles,
    ));
    lines.push(indented_error_line(form.group_error, &styles));

    // Done switch only exists when editing
    if form.is_edit() {
        let focused = form.focus == TaskField::Done;
        lines.push(Line::from(vec![
            Span::styled(label_cell("Done"), styles.label(focused)),
            Span::styled(if form.done { "[x]" } else { "[ ]" }, styles.value),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(" ", styles.dim),
        Span::styled("Tab", styles.key),
        Span::styled(" next field  ", styles.dim),
        Span::styled("\u{2190}\u{2192}", styles.key),
        Span::styled(" change", styles.dim),
    ]));
    lines.push(hints_line(&styles));

    let popup = render_frame(frame, app, form.title(), lines, area, &styles);
    if let Some((row, col)) = cursor_at {
        place_cursor(frame, popup, row, col);
    }
}

/// Draw the bordered popup and return its outer rect
fn render_frame(
    frame: &mut Frame,
    app: &App,
    title: &str,
    lines: Vec<Line>,
    area: Rect,
    styles: &DialogStyles,
) -> Rect {
    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = centered_rect_fixed(DIALOG_WIDTH, height, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border)
        .title(Span::styled(format!(" {} ", title), styles.label_focused))
        .style(Style::default().bg(app.theme.background));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, popup);
    popup
}

/// Put the terminal cursor inside the popup at (row, col) of its inner area
fn place_cursor(frame: &mut Frame, popup: Rect, row: usize, col: usize) {
    let max_col = popup.width.saturating_sub(3) as usize;
    let x = popup.x + 1 + col.min(max_col) as u16;
    let y = popup.y + 1 + row as u16;
    if y < popup.y + popup.height.saturating_sub(1) {
        frame.set_cursor_position(Position::new(x, y));
    }
}

fn label_cell(label: &str) -> String {
    format!(" {:<width$}", label, width = VALUE_COL - 1)
}

fn field_line<'a>(label: &'a str, focused: bool, styles: &DialogStyles) -> Line<'a> {
    Line::from(Span::styled(format!(" {}", label), styles.label(focused)))
}

fn text_value_line<'a>(field: &TextField, inner_w: usize, styles: &DialogStyles) -> Line<'a> {
    Line::from(vec![
        Span::styled(" ", styles.value),
        Span::styled(
            unicode::truncate_to_width(field.value(), inner_w.saturating_sub(3)),
            styles.value.add_modifier(Modifier::UNDERLINED),
        ),
    ])
}

fn inline_text_line<'a>(
    label: &str,
    field: &TextField,
    focused: bool,
    value_w: usize,
    styles: &DialogStyles,
) -> Line<'a> {
    let shown = unicode::pad_to_width(field.value(), value_w.saturating_sub(1));
    Line::from(vec![
        Span::styled(label_cell(label), styles.label(focused)),
        Span::styled(shown, styles.value.add_modifier(Modifier::UNDERLINED)),
    ])
}

fn picker_line<'a>(label: &str, value: Span<'a>, focused: bool, styles: &DialogStyles) -> Line<'a> {
    let arrow = styles.label(focused);
    Line::from(vec![
        Span::styled(label_cell(label), styles.label(focused)),
        Span::styled("\u{25C2} ", arrow), // ◂
        value,
        Span::styled(" \u{25B8}", arrow), // ▸
    ])
}

fn error_line<'a>(error: Option<FormError>, styles: &DialogStyles) -> Line<'a> {
    match error {
        Some(e) => Line::from(Span::styled(format!(" {}", e), styles.error)),
        None => Line::from(""),
    }
}

fn indented_error_line<'a>(error: Option<FormError>, styles: &DialogStyles) -> Line<'a> {
    match error {
        Some(e) => Line::from(Span::styled(
            format!("{}{}", " ".repeat(VALUE_COL), e),
            styles.error,
        )),
        None => Line::from(""),
    }
}

fn hints_line<'a>(styles: &DialogStyles) -> Line<'a> {
    let mut spans = vec![Span::styled(" ", styles.dim)];
    spans.extend(key_hint_spans(
        &[("Enter", "save"), ("Esc", "cancel")],
        styles.key,
        styles.dim,
    ));
    Line::from(spans)
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Group, Task};
use crate::ops::state_ops::{find_group, find_task, group_progress};
use crate::tui::app::{App, FlatItem};
use crate::util::unicode;

use super::helpers::{pad_spans, spans_width};

const TASK_INDENT: &str = "     ";

/// Render groups with their tasks as a collapsible tree
pub fn render_tree_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.state.groups.is_empty() {
        render_empty_state(frame, app, area);
        return;
    }

    let items = app.build_flat_items();
    let height = area.height as usize;

    // Keep the cursor visible
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }
    app.scroll_offset = app.scroll_offset.min(items.len().saturating_sub(1));

    let width = area.width as usize;
    let app: &App = app;
    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
        .map(|(idx, item)| {
            let is_cursor = idx == app.cursor;
            match *item {
                FlatItem::Group { group_id, expanded } => match find_group(&app.state, group_id) {
                    Some(group) => render_group_line(app, group, expanded, is_cursor, width),
                    None => Line::from(""),
                },
                FlatItem::Task { task_id, .. } => match find_task(&app.state, task_id) {
                    Some(task) => render_task_line(app, task, is_cursor, width),
                    None => Line::from(""),
                },
                FlatItem::Empty { .. } => Line::from(Span::styled(
                    format!("{}No tasks in this group", TASK_INDENT),
                    Style::default()
                        .fg(app.theme.dim)
                        .bg(bg)
                        .add_modifier(Modifier::ITALIC),
                )),
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bright = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let key = Style::default().fg(app.theme.highlight).bg(bg);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  No groups yet", bright)),
        Line::from(Span::styled("  Create a group to get started", dim)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  press ", dim),
            Span::styled("n", key),
            Span::styled(" to create a group", dim),
        ]),
    ];
    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_group_line<'a>(
    app: &App,
    group: &Group,
    expanded: bool,
    is_cursor: bool,
    width: usize,
) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let marker = if expanded { " \u{25BE} " } else { " \u{25B8} " }; // ▾ ▸
    let progress = group_progress(&app.state, group.id);
    let badge = format!(" {}/{} ", progress.done, progress.total);

    let name_budget = width.saturating_sub(marker.chars().count() + badge.len() + 1);
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            unicode::truncate_to_width(&group.name, name_budget),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    push_right_aligned(
        &mut spans,
        Span::styled(
            badge,
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight),
        ),
        width,
        bg,
    );
    Line::from(spans)
}

fn render_task_line<'a>(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let checkbox = if task.done { "[x] " } else { "[ ] " };
    let badge = format!(" {} ", task.difficulty);

    let name_style = if task.done {
        Style::default()
            .fg(app.theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };

    let fixed = TASK_INDENT.len() + checkbox.len() + badge.len() + 1;
    let budget = width.saturating_sub(fixed);
    let name = unicode::truncate_to_width(&task.name, budget);
    let name_width = unicode::display_width(&name);

    let mut spans = vec![
        Span::styled(TASK_INDENT, Style::default().bg(bg)),
        Span::styled(
            checkbox,
            Style::default()
                .fg(if task.done {
                    app.theme.highlight
                } else {
                    app.theme.dim
                })
                .bg(bg),
        ),
        Span::styled(name, name_style),
    ];

    // Description fills whatever room the name left
    let desc_budget = budget.saturating_sub(name_width + 2);
    if !task.description.is_empty() && desc_budget > 1 {
        spans.push(Span::styled("  ", Style::default().bg(bg)));
        spans.push(Span::styled(
            unicode::truncate_to_width(&task.description, desc_budget),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let mut badge_style = Style::default()
        .fg(app.theme.background)
        .bg(app.theme.difficulty_color(task.difficulty));
    if task.done {
        badge_style = badge_style.add_modifier(Modifier::DIM);
    }
    push_right_aligned(&mut spans, Span::styled(badge, badge_style), width, bg);
    Line::from(spans)
}

/// Append `right` flush against the right edge, with one cell of margin
fn push_right_aligned<'a>(
    spans: &mut Vec<Span<'a>>,
    right: Span<'a>,
    width: usize,
    bg: ratatui::style::Color,
) {
    let right_width = unicode::display_width(&right.content) + 1;
    let used = spans_width(spans);
    if used + right_width <= width {
        spans.push(Span::styled(
            " ".repeat(width - used - right_width),
            Style::default().bg(bg),
        ));
        spans.push(right);
    }
    pad_spans(spans, width, bg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GroupId;
    use crate::ops::intent::Intent;
    use crate::tui::render::test_helpers::*;

    fn render_tree(app: &mut App) -> String {
        render_to_string(TERM_W, 20, |frame, area| {
            render_tree_view(frame, app, area);
        })
    }

    #[test]
    fn tree_seed_rows() {
        let mut app = seed_app();
        let output = render_tree(&mut app);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains("\u{25BE} Work"));
        assert!(lines[0].trim_end().ends_with("0/1"));
        assert!(lines[1].contains("[ ] Finish report  Q2 results"));
        assert!(lines[1].trim_end().ends_with("hard"));
        assert!(lines[2].contains("Home"));
        assert!(lines[2].trim_end().ends_with("1/1"));
        assert!(lines[3].contains("[x] Buy groceries"));
        assert!(lines[3].trim_end().ends_with("easy"));
    }

    #[test]
    fn tree_collapsed_group() {
        let mut app = seed_app();
        app.toggle_expanded(GroupId(1));
        let output = render_tree(&mut app);
        assert!(output.contains("\u{25B8} Work"));
        assert!(!output.contains("Finish report"));
        assert!(output.contains("Buy groceries"));
    }

    #[test]
    fn tree_empty_group_placeholder() {
        let mut app = seed_app();
        app.dispatch(Intent::UpsertGroup(Group::new(GroupId(3), "Personal")));
        let output = render_tree(&mut app);
        assert!(output.contains("Personal"));
        assert!(output.contains("No tasks in this group"));
        assert!(output.contains("0/0"));
    }

    #[test]
    fn tree_no_groups() {
        let mut app = empty_app();
        let output = render_tree(&mut app);
        assert!(output.contains("No groups yet"));
        assert!(output.contains("Create a group to get started"));
    }

    #[test]
    fn tree_scrolls_to_cursor() {
        let mut app = seed_app();
        for i in 3..30 {
            app.dispatch(Intent::UpsertGroup(Group::new(GroupId(i), format!("Group {}", i))));
        }
        app.dispatch(Intent::DeleteGroup(GroupId(1)));
        app.cursor_to_bottom();
        let output = render_tree(&mut app);
        assert!(output.contains("Group 29"));
        assert!(!output.contains("Home"));
        assert!(app.scroll_offset > 0);
    }

    #[test]
    fn tree_truncates_long_names() {
        let mut app = seed_app();
        app.dispatch(Intent::UpsertGroup(Group::new(GroupId(1), "x".repeat(200))));
        let output = render_tree(&mut app);
        let first = output.lines().next().unwrap();
        assert!(first.contains('\u{2026}'));
        assert!(first.trim_end().ends_with("0/1"));
    }
}

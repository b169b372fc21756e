use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::util::unicode;

/// A `width` x `height` rect centered in `area` (clamped to it)
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Pad a row of spans out to `width` cells with `bg`
pub(super) fn pad_spans(spans: &mut Vec<Span<'_>>, width: usize, bg: Color) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
}

/// Key hint pairs like `Enter save  Esc cancel`
pub(super) fn key_hint_spans<'a>(
    hints: &[(&'a str, &'a str)],
    key_style: Style,
    text_style: Style,
) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", text_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}", desc), text_style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect_fixed(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect_fixed(50, 50, area), area);
    }

    #[test]
    fn key_hints_join_pairs() {
        let spans = key_hint_spans(
            &[("Enter", "save"), ("Esc", "cancel")],
            Style::default(),
            Style::default(),
        );
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Enter save  Esc cancel");
    }
}

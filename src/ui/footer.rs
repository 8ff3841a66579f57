use crate::ui::nav::NavState;
use crate::ui::theme::{DECK_INDIGO, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Two content lines inside the border: the per-slide indicator
    /// dots, then the key hints with the version right-aligned.
    pub fn widget(&self, area: Rect, nav: &NavState) -> Paragraph<'static> {
        let content_width = area.width.saturating_sub(2) as usize;

        let dots = indicator_line(nav.position(), nav.count(), content_width);

        let hint_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        // Hints for controls disabled at the current boundary are muted.
        let prev_style = if nav.is_first() {
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
        } else {
            hint_style
        };
        let next_style = if nav.is_last() {
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
        } else {
            hint_style
        };

        let hints = [
            (" ←/h: Prev", prev_style),
            (" │ →/l: Next", next_style),
            (" │ Tab: Overview │ Home/End: First/Last │ q: Quit", hint_style),
        ];
        let version = format!("v{} ", VERSION);

        let hints_width: usize = hints.iter().map(|(text, _)| text.chars().count()).sum();
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version.chars().count());

        let mut spans: Vec<Span<'static>> = hints
            .iter()
            .map(|(text, style)| Span::styled(text.to_string(), *style))
            .collect();
        spans.push(Span::styled(" ".repeat(padding), hint_style));
        spans.push(Span::styled(version, hint_style));

        Paragraph::new(vec![dots, Line::from(spans)])
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// Centered dot row, one dot per slide, the current one filled.
fn indicator_line(position: usize, count: usize, content_width: usize) -> Line<'static> {
    let dots_width = indicator_width(count);
    if dots_width > content_width {
        // Too narrow for dots; fall back to a bare counter.
        return Line::from(Span::styled(
            format!("{}/{}", position + 1, count),
            Style::default().fg(HEADER_TEXT),
        ));
    }

    let mut spans = vec![Span::raw(" ".repeat((content_width - dots_width) / 2))];
    for index in 0..count {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        if index == position {
            spans.push(Span::styled("●", Style::default().fg(DECK_INDIGO)));
        } else {
            spans.push(Span::styled("○", Style::default().fg(MUTED_TEXT)));
        }
    }
    Line::from(spans)
}

fn indicator_width(count: usize) -> usize {
    2 * count - 1
}

/// Maps a click inside the footer onto the slide index of the dot under
/// the cursor. Returns `None` for clicks between or outside the dots.
pub fn indicator_hit(footer: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    if footer.height < 3 || count == 0 {
        return None;
    }
    // First content row inside the border.
    if row != footer.y + 1 {
        return None;
    }
    let content_width = footer.width.saturating_sub(2) as usize;
    let dots_width = indicator_width(count);
    if dots_width > content_width {
        return None;
    }
    let start = footer.x as usize + 1 + (content_width - dots_width) / 2;
    let column = column as usize;
    if column < start || column >= start + dots_width {
        return None;
    }
    let offset = column - start;
    if offset % 2 != 0 {
        return None;
    }
    Some(offset / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footer() -> Rect {
        Rect {
            x: 0,
            y: 20,
            width: 80,
            height: 4,
        }
    }

    #[test]
    fn hit_on_each_dot_maps_to_its_slide() {
        let count: usize = 16;
        let start: usize = 1 + (78 - 31) / 2;
        for index in 0..count {
            let column = (start + 2 * index) as u16;
            assert_eq!(indicator_hit(footer(), count, column, 21), Some(index));
        }
    }

    #[test]
    fn hit_between_dots_misses() {
        let start = 1 + (78 - 31) / 2;
        assert_eq!(indicator_hit(footer(), 16, (start + 1) as u16, 21), None);
    }

    #[test]
    fn hit_on_wrong_row_misses() {
        let start = 1 + (78 - 31) / 2;
        assert_eq!(indicator_hit(footer(), 16, start as u16, 22), None);
    }

    #[test]
    fn hit_outside_dot_band_misses() {
        assert_eq!(indicator_hit(footer(), 16, 0, 21), None);
        assert_eq!(indicator_hit(footer(), 16, 79, 21), None);
    }

    #[test]
    fn narrow_footer_disables_hits() {
        let narrow = Rect {
            x: 0,
            y: 20,
            width: 10,
            height: 4,
        };
        assert_eq!(indicator_hit(narrow, 16, 5, 21), None);
    }
}

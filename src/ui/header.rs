use crate::ui::theme::{DECK_INDIGO, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(
        &self,
        deck_name: &str,
        slide_title: &str,
        position: usize,
        count: usize,
    ) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(deck_name.to_string(), Style::default().fg(DECK_INDIGO)),
            Span::styled("  │  ", separator_style),
            Span::styled(slide_title.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Slide {} of {}", position + 1, count), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

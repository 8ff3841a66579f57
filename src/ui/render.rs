use crate::render::render as layout_slide;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::slide_view::slide_paragraph;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, DECK_INDIGO, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let slide = app.current_slide();

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(
            app.deck().name(),
            &slide.title,
            app.nav().position(),
            app.nav().count(),
        ),
        header,
    );

    frame.render_widget(Clear, body);
    let layout = layout_slide(slide);
    frame.render_widget(slide_paragraph(&layout, slide.variant), body);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, app.nav()), footer);

    if app.overview().is_visible() {
        draw_overview(frame, app, body);
    }
}

/// Overview popup: one numbered row per slide, selection highlighted,
/// the slide currently shown marked.
fn draw_overview(frame: &mut Frame<'_>, app: &App, body: ratatui::layout::Rect) {
    let cursor = app.overview().cursor().unwrap_or(0);
    let position = app.nav().position();

    let mut lines = Vec::new();
    for (idx, slide) in app.deck().slides().iter().enumerate() {
        let marker = if idx == position { "▸" } else { " " };
        let mut line = Line::from(vec![
            Span::styled(
                format!(" {marker} {:>2}. ", idx + 1),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(slide.title.clone(), Style::default().fg(HEADER_TEXT)),
        ]);
        if idx == cursor {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Up/Down: Move  Enter: Jump  1-9: Direct  Esc: Close",
        Style::default().fg(MUTED_TEXT),
    )));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(44);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled("Slides", Style::default().fg(DECK_INDIGO)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}

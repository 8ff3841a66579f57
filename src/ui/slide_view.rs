//! Widget mapping for slide layouts: one block at a time, into styled
//! lines inside a bordered paragraph.

use crate::deck::{Icon, MilestoneStatus, SlideVariant};
use crate::render::{Card, LayoutBlock, SlideLayout};
use crate::ui::theme::{self, BODY_TEXT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn slide_paragraph(layout: &SlideLayout, variant: SlideVariant) -> Paragraph<'static> {
    Paragraph::new(slide_lines(layout, variant))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

pub fn slide_lines(layout: &SlideLayout, variant: SlideVariant) -> Vec<Line<'static>> {
    let accent = theme::accent(variant);
    let accent_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("  {}", layout.heading),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )));
    if let Some(subheading) = &layout.subheading {
        lines.push(Line::from(Span::styled(
            format!("  {subheading}"),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    lines.push(Line::from(""));

    for block in &layout.blocks {
        match block {
            LayoutBlock::Lead(text) => {
                lines.push(Line::from(Span::styled(format!("  {text}"), accent_style)));
                lines.push(Line::from(""));
            }
            LayoutBlock::Cards(cards) => {
                for card in cards {
                    lines.extend(card_lines(card, accent_style));
                    lines.push(Line::from(""));
                }
            }
            LayoutBlock::BadgeGroups(groups) => {
                for group in groups {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("  {}", group.name),
                            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled("  —  ".to_string(), Style::default().fg(MUTED_TEXT)),
                        Span::styled(group.statement.clone(), Style::default().fg(BODY_TEXT)),
                    ]));
                    let mut badge_spans = vec![Span::raw("      ".to_string())];
                    for (idx, badge) in group.badges.iter().enumerate() {
                        if idx > 0 {
                            badge_spans.push(Span::raw(" ".to_string()));
                        }
                        badge_spans.push(Span::styled(
                            format!("[{badge}]"),
                            Style::default().fg(MUTED_TEXT),
                        ));
                    }
                    lines.push(Line::from(badge_spans));
                    lines.push(Line::from(""));
                }
            }
            LayoutBlock::Timeline(rows) => {
                for row in rows {
                    let status_style = Style::default().fg(theme::status_color(row.status));
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {} ", status_glyph(row.status)), status_style),
                        Span::styled(
                            row.name.clone(),
                            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(format!("  ·  {}", row.date), Style::default().fg(MUTED_TEXT)),
                        Span::styled(format!("  ·  {}", row.status.label()), status_style),
                    ]));
                    lines.push(Line::from(Span::styled(
                        format!("      {}", row.desc),
                        Style::default().fg(BODY_TEXT),
                    )));
                    lines.push(Line::from(""));
                }
            }
            LayoutBlock::Sections(sections) => {
                for section in sections {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", section.title),
                        accent_style,
                    )));
                    for bullet in &section.bullets {
                        lines.push(bullet_line(bullet, accent_style));
                    }
                    lines.push(Line::from(""));
                }
            }
            LayoutBlock::Facts(facts) => {
                for fact in facts {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("  {}:  ", fact.label),
                            Style::default().fg(MUTED_TEXT),
                        ),
                        Span::styled(fact.value.clone(), Style::default().fg(HEADER_TEXT)),
                    ]));
                }
                lines.push(Line::from(""));
            }
            LayoutBlock::Bullets(bullets) => {
                for bullet in bullets {
                    lines.push(bullet_line(bullet, accent_style));
                }
                lines.push(Line::from(""));
            }
            LayoutBlock::Columns(columns) => {
                for column in columns {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", column.title),
                        accent_style,
                    )));
                    for fact in &column.facts {
                        lines.push(Line::from(vec![
                            Span::styled(
                                format!("    {}:  ", fact.label),
                                Style::default().fg(MUTED_TEXT),
                            ),
                            Span::styled(fact.value.clone(), Style::default().fg(HEADER_TEXT)),
                        ]));
                    }
                    lines.push(Line::from(""));
                }
            }
            LayoutBlock::Note(text) => {
                lines.push(Line::from(Span::styled(
                    format!("  {text}"),
                    Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
                )));
                lines.push(Line::from(""));
            }
        }
    }

    lines
}

fn card_lines(card: &Card, accent_style: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let glyph = card.icon.map(icon_glyph);

    match &card.title {
        Some(title) => {
            let mut spans = vec![Span::raw("  ".to_string())];
            if let Some(glyph) = glyph {
                spans.push(Span::raw(format!("{glyph} ")));
            }
            spans.push(Span::styled(
                title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ));
            if let Some(stat) = &card.stat {
                spans.push(Span::styled(format!("  [{stat}]"), accent_style));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(Span::styled(
                format!("      {}", card.body),
                Style::default().fg(BODY_TEXT),
            )));
        }
        None => {
            let mut spans = vec![Span::raw("  ".to_string())];
            if let Some(glyph) = glyph {
                spans.push(Span::raw(format!("{glyph} ")));
            }
            spans.push(Span::styled(
                card.body.clone(),
                Style::default().fg(BODY_TEXT),
            ));
            lines.push(Line::from(spans));
            if let Some(stat) = &card.stat {
                lines.push(Line::from(Span::styled(format!("      {stat}"), accent_style)));
            }
        }
    }

    if let Some(note) = &card.note {
        lines.push(Line::from(Span::styled(
            format!("      {note}"),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

fn bullet_line(text: &str, accent_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled("    • ".to_string(), accent_style),
        Span::styled(text.to_string(), Style::default().fg(BODY_TEXT)),
    ])
}

fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Shield => "🛡",
        Icon::Zap => "⚡",
        Icon::Lock => "🔒",
        Icon::Smartphone => "📱",
        Icon::DollarSign => "💲",
    }
}

fn status_glyph(status: MilestoneStatus) -> &'static str {
    match status {
        MilestoneStatus::Complete => "✓",
        MilestoneStatus::InProgress => "◐",
        MilestoneStatus::Planned => "○",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    #[test]
    fn every_bundled_slide_produces_body_lines() {
        let deck = crate::deck::content::ecliptica_deck().unwrap();
        for slide in deck.slides() {
            let layout = render(slide);
            let lines = slide_lines(&layout, slide.variant);
            // Heading plus at least one content line per slide.
            assert!(lines.len() > 2, "slide '{}' rendered too little", slide.title);
        }
    }
}

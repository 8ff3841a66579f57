use crate::deck::{MilestoneStatus, SlideVariant};
use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const BODY_TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const MUTED_TEXT: Color = Color::Rgb(0x8b, 0x92, 0x9f);

pub const DECK_INDIGO: Color = Color::Rgb(0x6d, 0x5a, 0xe6);
pub const PROBLEM_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SOLUTION_GREEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const PROGRESS_AMBER: Color = Color::Rgb(0xf5, 0x9e, 0x0b);

/// Accent color used for a slide's emphasis spans.
pub fn accent(variant: SlideVariant) -> Color {
    match variant {
        SlideVariant::Problem | SlideVariant::Risks => PROBLEM_RED,
        SlideVariant::Solution | SlideVariant::Traction | SlideVariant::Closing => SOLUTION_GREEN,
        SlideVariant::Economics | SlideVariant::Projections | SlideVariant::Ask => PROGRESS_AMBER,
        _ => DECK_INDIGO,
    }
}

/// Emphasis color of a roadmap entry.
pub fn status_color(status: MilestoneStatus) -> Color {
    match status {
        MilestoneStatus::Complete => SOLUTION_GREEN,
        MilestoneStatus::InProgress => PROGRESS_AMBER,
        MilestoneStatus::Planned => MUTED_TEXT,
    }
}

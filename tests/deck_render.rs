//! Renderer dispatch coverage over the bundled deck.

use pitchdeck::deck::content::ecliptica_deck;
use pitchdeck::deck::{Slide, SlidePayload, SlideVariant};
use pitchdeck::render::{render, LayoutBlock};

#[test]
fn every_variant_has_a_non_fallback_mapping() {
    let deck = ecliptica_deck().unwrap();
    assert_eq!(deck.len(), SlideVariant::ALL.len());
    for slide in deck.slides() {
        let layout = render(slide);
        assert!(
            !layout.blocks.is_empty(),
            "variant {:?} fell through to the title-only fallback",
            slide.variant
        );
    }
}

#[test]
fn render_is_deterministic_across_the_deck() {
    let deck = ecliptica_deck().unwrap();
    for slide in deck.slides() {
        assert_eq!(render(slide), render(slide));
    }
}

#[test]
fn problem_slide_exposes_text_and_stat_verbatim() {
    let deck = ecliptica_deck().unwrap();
    let slide = &deck.slides()[1];
    assert_eq!(slide.variant, SlideVariant::Problem);

    let layout = render(slide);
    let LayoutBlock::Cards(cards) = &layout.blocks[0] else {
        panic!("problem slide should render a card grid");
    };
    let mev = cards
        .iter()
        .find(|c| c.body == "MEV exploitation costs users billions annually")
        .expect("MEV pain point present");
    assert_eq!(mev.stat.as_deref(), Some("$2B+ extracted in 2024"));
}

#[test]
fn competition_renders_one_badge_group_per_rival() {
    let deck = ecliptica_deck().unwrap();
    let slide = &deck.slides()[4];
    assert_eq!(slide.variant, SlideVariant::Competition);

    let layout = render(slide);
    let LayoutBlock::BadgeGroups(groups) = &layout.blocks[0] else {
        panic!("competition slide should render badge groups");
    };
    assert_eq!(groups.len(), 4);
    for group in groups {
        assert!(!group.statement.is_empty());
        assert_eq!(group.badges.len(), 3);
    }
}

#[test]
fn traction_timeline_preserves_status_and_order() {
    use pitchdeck::deck::MilestoneStatus;

    let deck = ecliptica_deck().unwrap();
    let slide = &deck.slides()[7];
    assert_eq!(slide.variant, SlideVariant::Traction);

    let layout = render(slide);
    let LayoutBlock::Timeline(rows) = &layout.blocks[0] else {
        panic!("traction slide should render a timeline");
    };
    let statuses: Vec<MilestoneStatus> = rows.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            MilestoneStatus::Complete,
            MilestoneStatus::InProgress,
            MilestoneStatus::Planned,
            MilestoneStatus::Planned,
        ]
    );
}

#[test]
fn mismatched_slide_renders_title_only() {
    let slide = Slide {
        title: "Orphan".to_string(),
        subtitle: None,
        variant: SlideVariant::Economics,
        payload: SlidePayload::Cover {
            lead: "wrong shape".to_string(),
        },
    };
    let layout = render(&slide);
    assert_eq!(layout.heading, "Orphan");
    assert!(layout.blocks.is_empty());
}

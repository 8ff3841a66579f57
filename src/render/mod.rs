//! Pure mapping from a slide to its structural layout.
//!
//! `render` dispatches on the slide's variant; every variant of the
//! closed set has an explicit mapping. The only degraded path is a slide
//! whose payload shape disagrees with its declared variant, which deck
//! validation already rejects at construction time: such a slide renders
//! as a title-only layout rather than failing the draw pass.

mod layout;

pub use layout::{
    BadgeGroup, Card, Fact, FactColumn, LayoutBlock, Section, SlideLayout, TimelineRow,
};

use crate::deck::{Projection, Slide, SlidePayload, SlideVariant};

/// Maps one slide to its displayable structure. Referentially
/// transparent: equal slides produce structurally equal layouts.
pub fn render(slide: &Slide) -> SlideLayout {
    let blocks = match (slide.variant, &slide.payload) {
        (SlideVariant::Cover, SlidePayload::Cover { lead }) => {
            vec![LayoutBlock::Lead(lead.clone())]
        }
        (SlideVariant::Problem, SlidePayload::Problem { points }) => {
            vec![LayoutBlock::Cards(
                points
                    .iter()
                    .map(|p| Card {
                        icon: Some(p.icon),
                        title: None,
                        body: p.text.clone(),
                        stat: Some(p.stat.clone()),
                        note: None,
                    })
                    .collect(),
            )]
        }
        (SlideVariant::Solution, SlidePayload::Solution { pillars }) => {
            vec![LayoutBlock::Cards(
                pillars
                    .iter()
                    .map(|p| Card {
                        icon: Some(p.icon),
                        title: Some(p.title.clone()),
                        body: p.desc.clone(),
                        stat: None,
                        note: None,
                    })
                    .collect(),
            )]
        }
        (SlideVariant::Innovation, SlidePayload::Innovation { breakthroughs }) => {
            vec![LayoutBlock::Cards(
                breakthroughs
                    .iter()
                    .map(|b| Card {
                        icon: None,
                        title: Some(b.title.clone()),
                        body: b.desc.clone(),
                        stat: Some(b.novelty.clone()),
                        note: Some(b.impact.clone()),
                    })
                    .collect(),
            )]
        }
        (SlideVariant::Competition, SlidePayload::Competition { rivals }) => {
            vec![LayoutBlock::BadgeGroups(
                rivals
                    .iter()
                    .map(|r| BadgeGroup {
                        name: r.name.clone(),
                        statement: r.advantage.clone(),
                        badges: r.gaps.clone(),
                    })
                    .collect(),
            )]
        }
        (SlideVariant::Market, SlidePayload::Market { segments }) => {
            vec![LayoutBlock::Cards(
                segments
                    .iter()
                    .map(|s| Card {
                        icon: None,
                        title: Some(s.name.clone()),
                        body: s.users.clone(),
                        stat: Some(s.tam.clone()),
                        note: Some(s.pain.clone()),
                    })
                    .collect(),
            )]
        }
        (
            SlideVariant::Economics,
            SlidePayload::Economics {
                supply,
                revenue,
                staking,
            },
        ) => {
            vec![
                LayoutBlock::Facts(vec![Fact {
                    label: "Token Supply".to_string(),
                    value: supply.clone(),
                }]),
                LayoutBlock::Bullets(revenue.clone()),
                LayoutBlock::Facts(vec![Fact {
                    label: "Staking".to_string(),
                    value: staking.clone(),
                }]),
            ]
        }
        (SlideVariant::Traction, SlidePayload::Traction { milestones }) => {
            vec![LayoutBlock::Timeline(
                milestones
                    .iter()
                    .map(|m| TimelineRow {
                        name: m.name.clone(),
                        status: m.status,
                        date: m.date.clone(),
                        desc: m.desc.clone(),
                    })
                    .collect(),
            )]
        }
        (SlideVariant::GoToMarket, SlidePayload::GoToMarket { phases }) => {
            vec![LayoutBlock::Sections(
                phases
                    .iter()
                    .map(|p| Section {
                        title: p.name.clone(),
                        bullets: p.items.clone(),
                    })
                    .collect(),
            )]
        }
        (
            SlideVariant::Projections,
            SlidePayload::Projections {
                conservative,
                growth,
            },
        ) => {
            vec![LayoutBlock::Columns(vec![
                projection_column("Conservative", conservative),
                projection_column("Growth", growth),
            ])]
        }
        (
            SlideVariant::Ask,
            SlidePayload::Ask {
                amount,
                allocations,
                runway,
            },
        ) => {
            vec![
                LayoutBlock::Lead(amount.clone()),
                LayoutBlock::Cards(
                    allocations
                        .iter()
                        .map(|a| Card {
                            icon: None,
                            title: Some(a.item.clone()),
                            body: a.desc.clone(),
                            stat: Some(a.amount.clone()),
                            note: None,
                        })
                        .collect(),
                ),
                LayoutBlock::Facts(vec![Fact {
                    label: "Runway".to_string(),
                    value: runway.clone(),
                }]),
            ]
        }
        (SlideVariant::Timing, SlidePayload::Timing { drivers }) => {
            vec![LayoutBlock::Facts(
                drivers
                    .iter()
                    .map(|d| Fact {
                        label: d.reason.clone(),
                        value: d.impact.clone(),
                    })
                    .collect(),
            )]
        }
        (SlideVariant::Team, SlidePayload::Team { roles, advisors }) => {
            vec![
                LayoutBlock::Cards(
                    roles
                        .iter()
                        .map(|r| Card {
                            icon: None,
                            title: Some(r.role.clone()),
                            body: r.profile.clone(),
                            stat: None,
                            note: None,
                        })
                        .collect(),
                ),
                LayoutBlock::Note(advisors.clone()),
            ]
        }
        (SlideVariant::Risks, SlidePayload::Risks { entries }) => {
            vec![LayoutBlock::Cards(
                entries
                    .iter()
                    .map(|e| Card {
                        icon: None,
                        title: Some(e.risk.clone()),
                        body: e.mitigation.clone(),
                        stat: Some(e.status.clone()),
                        note: None,
                    })
                    .collect(),
            )]
        }
        (SlideVariant::Exit, SlidePayload::Exit { scenarios }) => {
            vec![LayoutBlock::Cards(
                scenarios
                    .iter()
                    .map(|s| Card {
                        icon: None,
                        title: Some(s.name.clone()),
                        body: s.detail.clone(),
                        stat: Some(s.potential.clone()),
                        note: Some(s.timeline.clone()),
                    })
                    .collect(),
            )]
        }
        (
            SlideVariant::Closing,
            SlidePayload::Closing {
                cta,
                next_steps,
                contact,
            },
        ) => {
            vec![
                LayoutBlock::Lead(cta.clone()),
                LayoutBlock::Bullets(next_steps.clone()),
                LayoutBlock::Facts(vec![
                    Fact {
                        label: "Website".to_string(),
                        value: contact.website.clone(),
                    },
                    Fact {
                        label: "Email".to_string(),
                        value: contact.email.clone(),
                    },
                    Fact {
                        label: "Docs".to_string(),
                        value: contact.docs.clone(),
                    },
                ]),
            ]
        }
        // Declared variant and payload shape disagree. Deck validation
        // rejects this at construction; degrade to the title instead of
        // taking down the draw pass.
        _ => return title_only(slide),
    };

    SlideLayout {
        heading: slide.title.clone(),
        subheading: slide.subtitle.clone(),
        blocks,
    }
}

/// Minimal layout: heading and subheading only.
pub fn title_only(slide: &Slide) -> SlideLayout {
    SlideLayout {
        heading: slide.title.clone(),
        subheading: slide.subtitle.clone(),
        blocks: Vec::new(),
    }
}

fn projection_column(label: &str, p: &Projection) -> FactColumn {
    FactColumn {
        title: format!("{} ({})", label, p.year),
        facts: vec![
            Fact {
                label: "Users".to_string(),
                value: p.users.clone(),
            },
            Fact {
                label: "Tx Volume".to_string(),
                value: p.tx_volume.clone(),
            },
            Fact {
                label: "Market Cap".to_string(),
                value: p.market_cap.clone(),
            },
            Fact {
                label: "TVL".to_string(),
                value: p.tvl.clone(),
            },
        ],
    }
}

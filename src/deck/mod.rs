//! Deck model: an ordered, immutable, validated sequence of slides.

pub mod content;
mod slide;

pub use slide::{
    Allocation, Breakthrough, Contact, ExitScenario, Icon, Milestone, MilestoneStatus, OpenRole,
    PainPoint, Pillar, Projection, RiskEntry, Rival, RolloutPhase, Segment, Slide, SlidePayload,
    SlideVariant, TimingDriver,
};

use thiserror::Error;

/// Errors detected while assembling a deck.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("A deck must contain at least one slide")]
    Empty,

    #[error("Slide {index} ('{title}') declares variant {declared:?} but carries a {carried:?} payload")]
    PayloadMismatch {
        index: usize,
        title: String,
        declared: SlideVariant,
        carried: SlideVariant,
    },
}

/// The fixed, ordered collection of slides shown by the viewer.
///
/// Built once at startup and never mutated. Construction rejects empty
/// decks and slides whose payload shape disagrees with their declared
/// variant, so the renderer only ever sees well-formed slides.
#[derive(Clone, Debug, PartialEq)]
pub struct Deck {
    name: String,
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(name: impl Into<String>, slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        for (index, slide) in slides.iter().enumerate() {
            let carried = slide.payload.variant();
            if carried != slide.variant {
                return Err(DeckError::PayloadMismatch {
                    index,
                    title: slide.title.clone(),
                    declared: slide.variant,
                    carried,
                });
            }
        }
        Ok(Self {
            name: name.into(),
            slides,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of slides. Always at least 1.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deck_is_rejected() {
        assert!(matches!(Deck::new("empty", Vec::new()), Err(DeckError::Empty)));
    }

    #[test]
    fn mismatched_payload_is_rejected() {
        let slide = Slide {
            title: "Broken".to_string(),
            subtitle: None,
            variant: SlideVariant::Problem,
            payload: SlidePayload::Cover {
                lead: "nope".to_string(),
            },
        };
        let err = Deck::new("broken", vec![slide]).unwrap_err();
        match err {
            DeckError::PayloadMismatch {
                index,
                declared,
                carried,
                ..
            } => {
                assert_eq!(index, 0);
                assert_eq!(declared, SlideVariant::Problem);
                assert_eq!(carried, SlideVariant::Cover);
            }
            other => panic!("expected PayloadMismatch, got {other:?}"),
        }
    }

    #[test]
    fn slide_constructor_derives_variant_from_payload() {
        let slide = Slide::new(
            "Cover",
            SlidePayload::Cover {
                lead: "lead".to_string(),
            },
        );
        assert_eq!(slide.variant, SlideVariant::Cover);
        assert!(slide.subtitle.is_none());
    }

    #[test]
    fn valid_deck_exposes_slides_in_order() {
        let deck = Deck::new(
            "two",
            vec![
                Slide::new(
                    "First",
                    SlidePayload::Cover {
                        lead: "lead".to_string(),
                    },
                ),
                Slide::new(
                    "Second",
                    SlidePayload::Closing {
                        cta: "cta".to_string(),
                        next_steps: vec!["step".to_string()],
                        contact: Contact {
                            website: "w".to_string(),
                            email: "e".to_string(),
                            docs: "d".to_string(),
                        },
                    },
                ),
            ],
        )
        .unwrap();
        assert_eq!(deck.len(), 2);
        assert!(!deck.is_empty());
        assert_eq!(deck.slide(0).unwrap().title, "First");
        assert_eq!(deck.slide(1).unwrap().title, "Second");
        assert!(deck.slide(2).is_none());
    }
}

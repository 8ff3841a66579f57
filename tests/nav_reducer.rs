//! Navigator state-machine properties.

use pitchdeck::ui::mvi::Reducer;
use pitchdeck::ui::nav::{NavIntent, NavReducer, NavState};

fn reduce_all(mut state: NavState, intents: &[NavIntent]) -> NavState {
    for intent in intents {
        state = NavReducer::reduce(state, *intent);
        assert!(
            state.position() < state.count(),
            "position escaped bounds after {intent:?}"
        );
    }
    state
}

#[test]
fn position_stays_bounded_for_every_deck_size() {
    // Exhaustive press walks for small decks, including repeated
    // boundary presses in both directions.
    for count in 1..=6 {
        let presses: Vec<NavIntent> = (0..count * 3)
            .map(|i| {
                if i % 3 == 0 {
                    NavIntent::Retreat
                } else {
                    NavIntent::Advance
                }
            })
            .chain((0..count * 3).map(|_| NavIntent::Retreat))
            .collect();
        let state = reduce_all(NavState::new(count), &presses);
        assert_eq!(state.position(), 0);
    }
}

#[test]
fn advance_is_idempotent_at_upper_boundary() {
    let mut state = NavState::new(4);
    for _ in 0..10 {
        state = NavReducer::reduce(state, NavIntent::Advance);
    }
    assert_eq!(state.position(), 3);
    assert!(state.is_last());
}

#[test]
fn retreat_is_idempotent_at_lower_boundary() {
    let mut state = NavState::new(4);
    for _ in 0..10 {
        state = NavReducer::reduce(state, NavIntent::Retreat);
    }
    assert_eq!(state.position(), 0);
    assert!(state.is_first());
}

#[test]
fn jump_sets_position_exactly() {
    for target in 0..16 {
        let state = NavReducer::reduce(NavState::new(16), NavIntent::JumpTo(target));
        assert_eq!(state.position(), target);
    }
}

#[test]
fn out_of_range_jump_leaves_state_unchanged() {
    let before = NavReducer::reduce(NavState::new(16), NavIntent::JumpTo(7));
    for target in [16, 17, usize::MAX] {
        let state = NavReducer::reduce(before, NavIntent::JumpTo(target));
        assert_eq!(state, before);
    }
}

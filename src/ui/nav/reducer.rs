//! Reducer for the slide cursor.

use crate::ui::mvi::Reducer;

use super::intent::NavIntent;
use super::state::NavState;

/// Pure transition function over [`NavState`].
///
/// All transitions are total: boundary presses clamp, and a `JumpTo`
/// outside the deck leaves the state untouched. Rejection reporting for
/// invalid jumps lives in the app layer, which validates before
/// dispatching.
pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = state.count();
        match intent {
            NavIntent::Advance => {
                NavState::at((state.position() + 1).min(count - 1), count)
            }
            NavIntent::Retreat => NavState::at(state.position().saturating_sub(1), count),
            NavIntent::JumpTo(index) if index < count => NavState::at(index, count),
            NavIntent::JumpTo(_) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(position: usize, count: usize) -> NavState {
        NavReducer::reduce(NavState::new(count), NavIntent::JumpTo(position))
    }

    #[test]
    fn advance_moves_forward() {
        let state = NavReducer::reduce(NavState::new(3), NavIntent::Advance);
        assert_eq!(state.position(), 1);
    }

    #[test]
    fn advance_clamps_at_last_slide() {
        let last = at(2, 3);
        let state = NavReducer::reduce(last, NavIntent::Advance);
        assert_eq!(state, last);
    }

    #[test]
    fn retreat_moves_backward() {
        let state = NavReducer::reduce(at(2, 3), NavIntent::Retreat);
        assert_eq!(state.position(), 1);
    }

    #[test]
    fn retreat_clamps_at_first_slide() {
        let first = NavState::new(3);
        let state = NavReducer::reduce(first, NavIntent::Retreat);
        assert_eq!(state, first);
    }

    #[test]
    fn jump_within_bounds_sets_position_exactly() {
        let state = NavReducer::reduce(NavState::new(16), NavIntent::JumpTo(9));
        assert_eq!(state.position(), 9);
    }

    #[test]
    fn jump_out_of_bounds_is_ignored() {
        let before = at(1, 3);
        let state = NavReducer::reduce(before, NavIntent::JumpTo(3));
        assert_eq!(state, before);
    }

    #[test]
    fn single_slide_deck_never_moves() {
        let state = NavState::new(1);
        let state = NavReducer::reduce(state, NavIntent::Advance);
        let state = NavReducer::reduce(state, NavIntent::Retreat);
        assert_eq!(state, NavState::new(1));
    }

    #[test]
    fn position_stays_in_bounds_over_any_press_sequence() {
        // Deterministic walk mixing boundary-heavy runs of both presses.
        let mut state = NavState::new(5);
        let presses = [
            NavIntent::Retreat,
            NavIntent::Advance,
            NavIntent::Advance,
            NavIntent::Advance,
            NavIntent::Advance,
            NavIntent::Advance,
            NavIntent::Advance,
            NavIntent::Retreat,
            NavIntent::Retreat,
            NavIntent::Retreat,
            NavIntent::Retreat,
            NavIntent::Retreat,
            NavIntent::Advance,
        ];
        for press in presses {
            state = NavReducer::reduce(state, press);
            assert!(state.position() < state.count());
        }
    }
}

use crate::ui::mvi::Reducer;

use super::intent::OverviewIntent;
use super::state::OverviewState;

/// Reducer for the overview dialog. Cursor movement wraps around the
/// row list.
pub struct OverviewReducer;

impl Reducer for OverviewReducer {
    type State = OverviewState;
    type Intent = OverviewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OverviewIntent::Open { at, count } => {
                let count = count.max(1);
                OverviewState::Visible {
                    cursor: at.min(count - 1),
                    count,
                }
            }
            OverviewIntent::Close => OverviewState::Hidden,
            OverviewIntent::MoveUp => match state {
                OverviewState::Visible { cursor, count } => {
                    let cursor = if cursor == 0 { count - 1 } else { cursor - 1 };
                    OverviewState::Visible { cursor, count }
                }
                OverviewState::Hidden => OverviewState::Hidden,
            },
            OverviewIntent::MoveDown => match state {
                OverviewState::Visible { cursor, count } => {
                    let cursor = if cursor + 1 >= count { 0 } else { cursor + 1 };
                    OverviewState::Visible { cursor, count }
                }
                OverviewState::Hidden => OverviewState::Hidden,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_places_cursor_on_requested_row() {
        let state = OverviewReducer::reduce(
            OverviewState::Hidden,
            OverviewIntent::Open { at: 4, count: 16 },
        );
        assert_eq!(
            state,
            OverviewState::Visible {
                cursor: 4,
                count: 16
            }
        );
    }

    #[test]
    fn open_clamps_cursor_to_row_list() {
        let state = OverviewReducer::reduce(
            OverviewState::Hidden,
            OverviewIntent::Open { at: 99, count: 16 },
        );
        assert_eq!(state.cursor(), Some(15));
    }

    #[test]
    fn movement_wraps_at_both_ends() {
        let top = OverviewState::Visible {
            cursor: 0,
            count: 3,
        };
        let wrapped = OverviewReducer::reduce(top, OverviewIntent::MoveUp);
        assert_eq!(wrapped.cursor(), Some(2));
        let wrapped = OverviewReducer::reduce(wrapped, OverviewIntent::MoveDown);
        assert_eq!(wrapped.cursor(), Some(0));
    }

    #[test]
    fn movement_on_hidden_dialog_is_a_noop() {
        let state = OverviewReducer::reduce(OverviewState::Hidden, OverviewIntent::MoveDown);
        assert_eq!(state, OverviewState::Hidden);
    }

    #[test]
    fn close_hides_dialog() {
        let state = OverviewReducer::reduce(
            OverviewState::Visible {
                cursor: 1,
                count: 2,
            },
            OverviewIntent::Close,
        );
        assert_eq!(state, OverviewState::Hidden);
    }
}

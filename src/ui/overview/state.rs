use crate::ui::mvi::UiState;

/// State of the slide-overview dialog.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum OverviewState {
    #[default]
    Hidden,
    Visible {
        /// Row the selection sits on. Always `< count`.
        cursor: usize,
        /// Number of rows the dialog was opened over.
        count: usize,
    },
}

impl UiState for OverviewState {}

impl OverviewState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn cursor(&self) -> Option<usize> {
        match self {
            Self::Hidden => None,
            Self::Visible { cursor, .. } => Some(*cursor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(OverviewState::default(), OverviewState::Hidden);
    }

    #[test]
    fn cursor_is_only_exposed_while_visible() {
        assert_eq!(OverviewState::Hidden.cursor(), None);
        assert_eq!(
            OverviewState::Visible {
                cursor: 3,
                count: 16
            }
            .cursor(),
            Some(3)
        );
    }
}

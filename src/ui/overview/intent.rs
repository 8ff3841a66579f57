use crate::ui::mvi::Intent;

/// Overview-dialog actions. Selecting a row is not an intent here: the
/// app layer reads the cursor, issues the jump, and closes the dialog.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OverviewIntent {
    /// Open over `count` rows with the selection on `at`.
    Open { at: usize, count: usize },
    Close,
    MoveUp,
    MoveDown,
}

impl Intent for OverviewIntent {}

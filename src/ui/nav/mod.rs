//! Navigator: the bounded slide cursor and its transitions.

mod intent;
mod reducer;
mod state;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::NavState;

use thiserror::Error;

/// Rejection raised by an explicit jump to an index outside the deck.
/// The prior position is always retained.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum NavError {
    #[error("slide index {index} is out of range for a deck of {count} slides")]
    OutOfRange { index: usize, count: usize },
}

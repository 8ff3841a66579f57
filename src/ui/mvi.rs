//! Model-View-Intent primitives for the viewer's UI state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Input events become intents, reducers turn intents into new state
//! values, and the draw pass reads state. Reducers are pure; anything
//! with a side effect (logging, signalling a redraw) happens around the
//! dispatch call in [`crate::ui::app::App`].

/// Marker trait for intents: navigation presses, dialog movements, and
/// other discrete user actions.
pub trait Intent: Send + 'static {}

/// Marker trait for UI state values. Implementors are plain data:
/// cloneable, comparable (so dispatch can detect no-op transitions) and
/// default-constructible (so dispatch can temporarily take ownership).
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A pure state-transition function over one state/intent pair.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Produces the successor state. Total: invalid intents leave the
    /// state unchanged rather than panicking.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

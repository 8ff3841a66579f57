use crate::deck::{Deck, Slide};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavError, NavIntent, NavReducer, NavState};
use crate::ui::overview::{OverviewIntent, OverviewReducer, OverviewState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Top-level view state: the immutable deck, the navigator cursor, the
/// overview dialog, and the terminal size for mouse hit-testing.
pub struct App {
    deck: Deck,
    nav: NavState,
    overview: OverviewState,
    should_quit: bool,
    size: Option<(u16, u16)>,
}

impl App {
    pub fn new(deck: Deck) -> Self {
        let nav = NavState::new(deck.len());
        Self {
            deck,
            nav,
            overview: OverviewState::default(),
            should_quit: false,
            size: None,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    /// The slide under the cursor. The navigator invariant keeps the
    /// position inside the deck, so this never fails for a validated
    /// deck; a bare title stands in if it ever would.
    pub fn current_slide(&self) -> &Slide {
        self.deck
            .slide(self.nav.position())
            .unwrap_or_else(|| &self.deck.slides()[0])
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    /// Moves one slide forward, clamped at the last slide. Returns
    /// whether the position changed.
    pub fn advance(&mut self) -> bool {
        self.dispatch_nav(NavIntent::Advance)
    }

    /// Moves one slide back, clamped at the first slide. Returns
    /// whether the position changed.
    pub fn retreat(&mut self) -> bool {
        self.dispatch_nav(NavIntent::Retreat)
    }

    /// Jumps to an absolute slide index. An out-of-range index is
    /// rejected and the current position retained.
    pub fn jump_to(&mut self, index: usize) -> Result<bool, NavError> {
        if !self.nav.contains(index) {
            return Err(NavError::OutOfRange {
                index,
                count: self.nav.count(),
            });
        }
        Ok(self.dispatch_nav(NavIntent::JumpTo(index)))
    }

    fn dispatch_nav(&mut self, intent: NavIntent) -> bool {
        let before = self.nav;
        dispatch_mvi!(self, nav, NavReducer, intent);
        let changed = before != self.nav;
        if changed {
            tracing::debug!(
                from = before.position(),
                to = self.nav.position(),
                "slide position changed"
            );
        }
        changed
    }

    pub fn overview(&self) -> &OverviewState {
        &self.overview
    }

    /// Opens the overview with the selection on the current slide, or
    /// closes it if it is already open. Returns whether it is now open.
    pub fn toggle_overview(&mut self) -> bool {
        let intent = if self.overview.is_visible() {
            OverviewIntent::Close
        } else {
            OverviewIntent::Open {
                at: self.nav.position(),
                count: self.nav.count(),
            }
        };
        dispatch_mvi!(self, overview, OverviewReducer, intent);
        self.overview.is_visible()
    }

    pub fn close_overview(&mut self) {
        dispatch_mvi!(self, overview, OverviewReducer, OverviewIntent::Close);
    }

    pub fn overview_move_up(&mut self) {
        dispatch_mvi!(self, overview, OverviewReducer, OverviewIntent::MoveUp);
    }

    pub fn overview_move_down(&mut self) {
        dispatch_mvi!(self, overview, OverviewReducer, OverviewIntent::MoveDown);
    }

    /// Confirms the overview selection: jumps there and closes the
    /// dialog. No-op while the dialog is hidden.
    pub fn overview_select(&mut self) {
        if let Some(cursor) = self.overview.cursor() {
            // The dialog only ever offers in-range rows.
            if let Err(err) = self.jump_to(cursor) {
                tracing::warn!(%err, "overview selection rejected");
            }
            self.close_overview();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::content::ecliptica_deck;
    use crate::ui::nav::NavError;

    fn app() -> App {
        App::new(ecliptica_deck().unwrap())
    }

    #[test]
    fn starts_on_first_slide() {
        let app = app();
        assert_eq!(app.nav().position(), 0);
        assert_eq!(app.current_slide().title, "Ecliptica");
    }

    #[test]
    fn jump_out_of_range_is_rejected_and_state_retained() {
        let mut app = app();
        app.advance();
        let err = app.jump_to(16).unwrap_err();
        assert_eq!(
            err,
            NavError::OutOfRange {
                index: 16,
                count: 16
            }
        );
        assert_eq!(app.nav().position(), 1);
    }

    #[test]
    fn boundary_presses_report_no_change() {
        let mut app = app();
        assert!(!app.retreat());
        assert!(app.advance());
        assert!(app.retreat());
    }

    #[test]
    fn overview_select_jumps_and_closes() {
        let mut app = app();
        assert!(app.toggle_overview());
        app.overview_move_down();
        app.overview_move_down();
        app.overview_select();
        assert_eq!(app.nav().position(), 2);
        assert!(!app.overview().is_visible());
    }

    #[test]
    fn toggle_overview_twice_returns_to_hidden() {
        let mut app = app();
        assert!(app.toggle_overview());
        assert!(!app.toggle_overview());
        assert!(!app.overview().is_visible());
    }
}

//! End-to-end navigation scenarios over the bundled 16-slide deck.

use pitchdeck::deck::content::ecliptica_deck;
use pitchdeck::ui::app::App;

fn app() -> App {
    App::new(ecliptica_deck().unwrap())
}

#[test]
fn walking_forward_stops_at_the_last_slide() {
    let mut app = app();
    for _ in 0..15 {
        assert!(app.advance());
    }
    assert_eq!(app.nav().position(), 15);
    assert!(app.nav().is_last());

    // The forward control is disabled here; one more press is a no-op.
    assert!(!app.advance());
    assert_eq!(app.nav().position(), 15);
}

#[test]
fn stepping_back_then_jumping_home() {
    let mut app = app();
    for _ in 0..15 {
        app.advance();
    }

    assert!(app.retreat());
    assert_eq!(app.nav().position(), 14);

    // Indicator press for the first slide.
    assert!(app.jump_to(0).unwrap());
    assert_eq!(app.nav().position(), 0);
    assert!(app.nav().is_first());
}

#[test]
fn every_slide_is_reachable_through_the_overview() {
    let mut app = app();
    for target in (0..16).rev() {
        app.toggle_overview();
        assert!(app.overview().is_visible());
        // Move the cursor from the current slide onto the target row.
        while app.overview().cursor() != Some(target) {
            app.overview_move_down();
        }
        app.overview_select();
        assert_eq!(app.nav().position(), target);
        assert!(!app.overview().is_visible());
    }
}

#[test]
fn rejected_jump_keeps_prior_position() {
    let mut app = app();
    app.advance();
    app.advance();
    assert!(app.jump_to(99).is_err());
    assert_eq!(app.nav().position(), 2);
}

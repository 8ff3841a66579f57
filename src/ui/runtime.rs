use crate::deck::Deck;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Runtime knobs resolved from config and CLI before the UI starts.
pub struct ViewerOptions {
    /// Zero-based slide to open at. Validated against the deck by the
    /// caller.
    pub start: usize,
    pub tick_rate: Duration,
    pub mouse: bool,
}

pub fn run(deck: Deck, options: ViewerOptions) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(options.mouse)?;
    let mut app = App::new(deck);
    if options.start != 0 {
        app.jump_to(options.start)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
    }
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    let events = EventHandler::new(options.tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(options.tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

use crate::ui::app::App;
use crate::ui::footer::indicator_hit;
use crate::ui::layout::footer_rect;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.overview().is_visible() {
        match key.code {
            KeyCode::Esc | KeyCode::Tab => app.close_overview(),
            KeyCode::Char('o') => app.close_overview(),
            KeyCode::Up | KeyCode::Char('k') => app.overview_move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.overview_move_down(),
            KeyCode::Enter => app.overview_select(),
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                let digit = ch.to_digit(10).unwrap_or(0) as usize;
                if digit > 0 && app.jump_to(digit - 1).is_ok() {
                    app.close_overview();
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::PageDown => {
            app.advance();
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
            app.retreat();
        }
        KeyCode::Home | KeyCode::Char('g') => {
            if let Err(err) = app.jump_to(0) {
                tracing::warn!(%err, "jump to first slide rejected");
            }
        }
        KeyCode::End | KeyCode::Char('G') => {
            let last = app.nav().count() - 1;
            if let Err(err) = app.jump_to(last) {
                tracing::warn!(%err, "jump to last slide rejected");
            }
        }
        KeyCode::Tab | KeyCode::Char('o') => {
            app.toggle_overview();
        }
        _ => {}
    }
}

/// Routes a left click on a progress-indicator dot to a jump. All other
/// mouse activity is ignored.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if app.overview().is_visible() {
        return;
    }
    let Some((cols, rows)) = app.size() else {
        return;
    };
    let footer = footer_rect(cols, rows);
    if let Some(index) = indicator_hit(footer, app.nav().count(), mouse.column, mouse.row) {
        if let Err(err) = app.jump_to(index) {
            tracing::warn!(%err, "indicator jump rejected");
        }
    }
}

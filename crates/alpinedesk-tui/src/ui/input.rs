//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, AppState, Page};
use crate::pages::Overlay;

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return false;
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return false;
    }

    // Modal overlays take every key
    if !app.overlays.is_empty() {
        handle_overlay_input(app, key);
        return false;
    }

    match key.code {
        KeyCode::Char('q') => app.state = AppState::ConfirmingQuit,
        KeyCode::Char('?') => app.state = AppState::ShowingHelp,
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(page) = Page::from_shortcut(c) {
                app.switch_page(page);
            }
        }
        KeyCode::Left => app.switch_page(app.page.prev()),
        KeyCode::Right => app.switch_page(app.page.next()),
        KeyCode::Char(',') | KeyCode::Char('<') => app.selector_prev(),
        KeyCode::Char('.') | KeyCode::Char('>') => app.selector_next(),
        KeyCode::Char('s') => app.toggle_sidebar(),
        KeyCode::Char('r') => app.refresh_current_page(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('a') => app.add(),
        KeyCode::Char('e') => app.edit(),
        KeyCode::Char('f') => app.filter(),
        KeyCode::Char('u') => app.upcoming(),
        _ => {}
    }
    false
}

fn handle_overlay_input(app: &mut App, key: KeyEvent) {
    let Some(top) = app.overlays.last_mut() else {
        return;
    };

    match top {
        Overlay::Notice(_) | Overlay::Members(_) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                app.close_overlay();
            }
        }
        Overlay::GroupDetail(_) => match key.code {
            KeyCode::Char('m') => app.view_group_members(),
            KeyCode::Enter | KeyCode::Esc => app.close_overlay(),
            _ => {}
        },
        Overlay::Form(form) => match key.code {
            KeyCode::Esc => app.close_overlay(),
            KeyCode::Enter => app.submit_form(),
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Left => form.cycle_choice(false),
            KeyCode::Right => form.cycle_choice(true),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.input(c),
            _ => {}
        },
    }
}

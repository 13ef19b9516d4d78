//! Keyboard input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User intents the terminal client can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppAction {
    Roll,
    Reset,
    DismissPopup,
    ToggleHowToPlay,
    ToggleRules,
    Quit,
}

/// Maps a key press to an action, if any.
pub fn map_key(key: KeyEvent) -> Option<AppAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(AppAction::Quit);
    }

    match key.code {
        KeyCode::Char('r') | KeyCode::Char(' ') => Some(AppAction::Roll),
        KeyCode::Char('n') => Some(AppAction::Reset),
        KeyCode::Enter | KeyCode::Esc => Some(AppAction::DismissPopup),
        KeyCode::Char('h') => Some(AppAction::ToggleHowToPlay),
        KeyCode::Char('?') => Some(AppAction::ToggleRules),
        KeyCode::Char('q') => Some(AppAction::Quit),
        _ => None,
    }
}

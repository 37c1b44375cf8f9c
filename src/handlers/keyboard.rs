//! Keyboard Input Handler
//!
//! Maps key presses to intents. The only state touched here is the vim
//! double-key tracker; list changes are left to `update`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use mixtable::messages::Intent;
use mixtable::model::{Model, VimCommandState};

/// Handle keyboard input
///
/// Returns the intent for the key, or None if the key does nothing. Toggle
/// intents carry the id of the row currently rendered under the cursor.
pub fn handle_key(model: &mut Model, key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        model.ui.vim_command_state = VimCommandState::None;
        return match key.code {
            KeyCode::Char('c') => Some(Intent::Quit),
            KeyCode::Char('d') if model.ui.vim_mode => Some(Intent::PageDown),
            KeyCode::Char('u') if model.ui.vim_mode => Some(Intent::PageUp),
            _ => None,
        };
    }

    // Vim 'gg' needs the previous key
    if model.ui.vim_mode {
        let waiting = model.ui.vim_command_state == VimCommandState::WaitingForSecondG;
        model.ui.vim_command_state = VimCommandState::None;

        match key.code {
            KeyCode::Char('g') if waiting => return Some(Intent::CursorFirst),
            KeyCode::Char('g') => {
                model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
                return None;
            }
            KeyCode::Char('G') => return Some(Intent::CursorLast),
            KeyCode::Char('j') => return Some(Intent::CursorDown),
            KeyCode::Char('k') => return Some(Intent::CursorUp),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Up => Some(Intent::CursorUp),
        KeyCode::Down => Some(Intent::CursorDown),
        KeyCode::Home => Some(Intent::CursorFirst),
        KeyCode::End => Some(Intent::CursorLast),
        KeyCode::PageUp => Some(Intent::PageUp),
        KeyCode::PageDown => Some(Intent::PageDown),
        KeyCode::Char('s') => Some(Intent::ShuffleRequested),
        KeyCode::Enter | KeyCode::Char(' ') => model
            .cursor_item()
            .map(|item| Intent::ToggleRequested(item.id)),
        _ => None,
    }
}

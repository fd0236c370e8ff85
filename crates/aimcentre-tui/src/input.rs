use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NextCategory,
    PrevCategory,
    NextSubCategory,
    PrevSubCategory,
    ClearSubCategory,
    PageLeft,
    PageRight,
    TogglePause,
    Enroll,
    ToggleWishlist,
    ToggleLocale,
    Help,
    ExitMode,
    Confirm,
    Cancel,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    let binding = KeyBinding::from_event(&key);
    let keymap = &app.keymap;

    match app.mode {
        // Any key closes help
        Mode::Help => return Action::ExitMode,
        Mode::Enroll => return handle_enroll_mode(&binding, keymap),
        Mode::Normal => {}
    }

    keymap.get(&binding).copied().unwrap_or(Action::None)
}

/// Keys inside the enrollment dialog: confirm or dismiss, nothing else
fn handle_enroll_mode(binding: &KeyBinding, keymap: &Keymap) -> Action {
    match binding.code {
        KeyCode::Enter | KeyCode::Char('y') => Action::Confirm,
        KeyCode::Esc | KeyCode::Char('n') => Action::Cancel,
        _ => match keymap.get(binding) {
            Some(Action::Quit) => Action::Quit,
            _ => Action::None,
        },
    }
}

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};
use crate::page::Section;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextSection,
    PrevSection,
    GoToSection(Section), // Number keys 1-6
    OpenGithub,
    OpenLinkedin,
    OpenMail,
    OpenPaper,
    Help,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Help overlay: any key closes it
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    let binding = KeyBinding::new(key.code, key.modifiers);

    // Number keys jump straight to a section
    if let KeyCode::Char(c) = key.code {
        if let Some(digit) = c.to_digit(10) {
            if let Some(section) = Section::from_number(digit as usize) {
                return Action::GoToSection(section);
            }
        }
    }

    // 'gg' sequence handling
    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap
                .get_pending_g_action()
                .cloned()
                .unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}

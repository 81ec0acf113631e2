//! Key bindings: which `TuiEvent` means which `Action` on each screen.
//!
//! | Screen     | Keys            | Action        |
//! |------------|-----------------|---------------|
//! | Welcome    | Enter, `s`      | `Start`       |
//! | Exercising | Space, Enter    | `ToggleTimer` |
//! | Exercising | `n`, →          | `Next`        |
//! | Completed  | Enter, `b`      | `BackToHome`  |
//! | any        | `q`, Ctrl+C     | `Quit`        |
//!
//! `h` on the welcome screen opens the history overlay; that is a TUI-only
//! concern and never reaches the core.

use crate::core::action::Action;
use crate::core::state::Screen;
use crate::tui::event::TuiEvent;

pub fn action_for(screen: Screen, event: &TuiEvent) -> Option<Action> {
    match (screen, event) {
        (_, TuiEvent::ForceQuit | TuiEvent::InputChar('q')) => Some(Action::Quit),

        (Screen::Welcome, TuiEvent::Submit | TuiEvent::InputChar('s')) => Some(Action::Start),
        (Screen::Welcome, TuiEvent::Escape) => Some(Action::Quit),

        (Screen::Exercising, TuiEvent::InputChar(' ') | TuiEvent::Submit) => {
            Some(Action::ToggleTimer)
        }
        (Screen::Exercising, TuiEvent::InputChar('n') | TuiEvent::CursorRight) => {
            Some(Action::Next)
        }

        (Screen::Completed, TuiEvent::Submit | TuiEvent::InputChar('b')) => {
            Some(Action::BackToHome)
        }

        _ => None,
    }
}

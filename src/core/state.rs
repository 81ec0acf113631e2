//! # Application State
//!
//! Everything the flow controller knows about the current session.
//! No TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── exercises: Vec<ExerciseDefinition>   // immutable catalog
//! ├── screen: Screen                       // Welcome / Exercising / Completed
//! ├── current_exercise: usize              // 0..=N, N means all done
//! ├── timer: TimerService                  // elapsed seconds + running flag
//! ├── log: ExerciseLog                     // finished exercises, process lifetime
//! ├── session_start: usize                 // log length when this session began
//! ├── logged_this_visit: bool              // current timing already logged
//! └── status_message: String               // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::exercise::{ExerciseDefinition, default_exercises};
use crate::core::exercise_log::{ExerciseLog, ExerciseLogEntry};
use crate::core::timer::TimerService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Exercising,
    Completed,
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Exercising => "Exercise",
            Screen::Completed => "Complete",
        }
    }
}

pub struct App {
    pub exercises: Vec<ExerciseDefinition>,
    pub screen: Screen,
    pub current_exercise: usize,
    pub timer: TimerService,
    pub log: ExerciseLog,
    /// Index of the first log entry written by the current session.
    pub session_start: usize,
    /// True once the current timing has been written to the log.
    /// Cleared when the timer restarts or the exercise changes.
    pub logged_this_visit: bool,
    pub status_message: String,
}

impl App {
    /// An empty catalog falls back to the default exercises.
    pub fn new(exercises: Vec<ExerciseDefinition>) -> Self {
        let exercises = if exercises.is_empty() {
            default_exercises()
        } else {
            exercises
        };
        Self {
            exercises,
            screen: Screen::Welcome,
            current_exercise: 0,
            timer: TimerService::new(),
            log: ExerciseLog::new(),
            session_start: 0,
            logged_this_visit: false,
            status_message: String::from("Ready when you are"),
        }
    }

    /// The exercise being performed, if the walkthrough is in progress.
    pub fn current(&self) -> Option<&ExerciseDefinition> {
        match self.screen {
            Screen::Exercising => self.exercises.get(self.current_exercise),
            _ => None,
        }
    }

    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    /// Entries logged since the last `Start`.
    pub fn session_entries(&self) -> &[ExerciseLogEntry] {
        &self.log.all()[self.session_start.min(self.log.len())..]
    }

    pub fn is_last_exercise(&self) -> bool {
        self.current_exercise + 1 >= self.exercises.len()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(default_exercises())
    }
}

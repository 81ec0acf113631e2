//! # TUI Components
//!
//! One component per screen, plus the title bar and the history overlay.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: top status bar with screen, progress and status
//! - `WelcomeScreen`: instructions and entry points
//! - `ExerciseScreen`: the current exercise, its video panel and timer
//! - `CompletionScreen`: the end-of-workout message
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `History`: the log overlay, with a selection that survives frames
//!
//! Components receive external data as props, never by reaching into
//! `App`. `ui::draw_ui` is the only place that reads the state and hands
//! out props.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs   (top status bar)
//! ├── welcome.rs     (welcome screen)
//! ├── exercise.rs    (exercise screen)
//! ├── completion.rs  (completion screen)
//! └── history.rs     (history overlay)
//! ```

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub mod completion;
pub mod exercise;
pub mod history;
pub mod title_bar;
pub mod welcome;

pub use completion::CompletionScreen;
pub use exercise::ExerciseScreen;
pub use history::{History, HistoryEvent, HistoryState};
pub use title_bar::TitleBar;
pub use welcome::WelcomeScreen;

/// A key hint rendered as a coloured label: `[Enter] Start Exercise`.
pub fn button(key: &str, label: &str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("[{key}] "), Style::default().fg(Color::DarkGray)),
        Span::styled(
            label.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

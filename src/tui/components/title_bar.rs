//! # TitleBar Component
//!
//! Top status bar showing where the user is in the workout.
//!
//! ## Responsibilities
//!
//! - Display the current screen ("Welcome", "Exercise", "Complete")
//! - Display progress through the catalog while exercising ("2/4")
//! - Display the controller's status message ("Timer running", "Logged 12 seconds")
//!
//! ## Conditional Formatting
//!
//! 1. **Exercising**: `"Workout | Exercise 2/4 | Timer running"`
//! 2. **Status message**: `"Workout | Welcome | Ready when you are"`
//! 3. **Default**: `"Workout | Welcome"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Top status bar. All fields are props supplied by the parent each frame.
pub struct TitleBar {
    pub screen_label: String,
    pub status_message: String,
    /// `(position, total)`, 1-based, only while an exercise is showing.
    pub progress: Option<(usize, usize)>,
}

impl TitleBar {
    pub fn new(
        screen_label: String,
        status_message: String,
        progress: Option<(usize, usize)>,
    ) -> Self {
        Self {
            screen_label,
            status_message,
            progress,
        }
    }

    fn text(&self) -> String {
        let screen = match self.progress {
            Some((position, total)) => format!("{} {}/{}", self.screen_label, position, total),
            None => self.screen_label.clone(),
        };
        if self.status_message.is_empty() {
            format!("Workout | {}", screen)
        } else {
            format!("Workout | {} | {}", screen, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_progress() {
        let mut title_bar = TitleBar::new(
            "Exercise".to_string(),
            "Timer running".to_string(),
            Some((2, 4)),
        );
        let text = rendered(&mut title_bar);
        assert!(text.contains("Workout | Exercise 2/4 | Timer running"));
    }

    #[test]
    fn test_title_bar_without_status() {
        let mut title_bar = TitleBar::new("Welcome".to_string(), String::new(), None);
        let text = rendered(&mut title_bar);
        assert!(text.contains("Workout | Welcome"));
        assert_eq!(text.matches('|').count(), 1);
    }
}

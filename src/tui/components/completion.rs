//! # Completion Screen
//!
//! Shown after the last exercise. Enter goes back to the welcome screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::button;

pub struct CompletionScreen {
    /// Seconds logged during the session that just finished.
    pub session_seconds: u64,
}

impl CompletionScreen {
    pub fn new(session_seconds: u64) -> Self {
        Self { session_seconds }
    }
}

impl Component for CompletionScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "🎉 High Five! 🎉",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from("You've completed all the exercises. Great job!"),
            Line::from(Span::styled(
                format!("Total logged: {} seconds", self.session_seconds),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            button("Enter", "Back to Home", Color::Blue),
        ];

        let [content] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
    }
}

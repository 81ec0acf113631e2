//! # Welcome Screen
//!
//! Title, instructions and the keys for starting a workout or opening
//! the history.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::components::button;

const INSTRUCTIONS: [&str; 3] = [
    "1. Watch the video to understand the exercise.",
    "2. Once you're ready, press 'Start Exercise' to begin.",
    "3. Use the 'Done' button to log your exercise time.",
];

pub struct WelcomeScreen {
    pub exercise_count: usize,
    pub logged_count: usize,
}

impl WelcomeScreen {
    pub fn new(exercise_count: usize, logged_count: usize) -> Self {
        Self {
            exercise_count,
            logged_count,
        }
    }
}

impl Component for WelcomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "WELCOME",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Instructions:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        lines.extend(INSTRUCTIONS.iter().map(|text| {
            Line::from(Span::styled(*text, Style::default().fg(Color::Gray)))
        }));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{} exercises in this workout", self.exercise_count),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());
        lines.push(button("Enter", "Start Exercise", Color::Blue));
        lines.push(button(
            "h",
            &format!("History ({})", self.logged_count),
            Color::Green,
        ));
        lines.push(button("q", "Quit", Color::DarkGray));

        let height = lines.len() as u16;
        let [content] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, content);
    }
}

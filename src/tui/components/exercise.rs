//! # Exercise Screen
//!
//! One exercise: its name, the demonstration panel, the elapsed time and
//! the two controls. The toggle reads "Start Exercise" while the timer is
//! stopped and "Done" while it runs.
//!
//! The demonstration panel never fails the screen. An unresolved video
//! renders a red "Video not found" line and the controls stay usable.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::media::MediaStatus;
use crate::tui::component::Component;
use crate::tui::components::button;

pub struct ExerciseScreen<'a> {
    pub name: &'a str,
    /// 1-based position in the catalog.
    pub position: usize,
    pub total: usize,
    pub elapsed_seconds: u64,
    pub is_running: bool,
    pub media: &'a MediaStatus,
    pub player_name: &'a str,
}

impl ExerciseScreen<'_> {
    fn media_lines(&self) -> Vec<Line<'static>> {
        match self.media {
            MediaStatus::Playing(path) => vec![
                Line::from(Span::styled(
                    format!("▶ Playing {}", file_name(path)),
                    Style::default().fg(Color::Green),
                )),
                Line::from(Span::styled(
                    format!("in {}", self.player_name),
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            MediaStatus::Ready(path) => vec![
                Line::from(file_name(path)),
                Line::from(Span::styled(
                    "No player running (see --player)",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            MediaStatus::NotFound(_) => vec![Line::from(Span::styled(
                "Video not found",
                Style::default().fg(Color::Red),
            ))],
            MediaStatus::Idle => vec![Line::default()],
        }
    }

    fn toggle_button(&self) -> Line<'static> {
        if self.is_running {
            button("Space", "Done", Color::Red)
        } else {
            button("Space", "Start Exercise", Color::Green)
        }
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl Component for ExerciseScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Length;

        let media_lines = self.media_lines();
        let media_height = media_lines.len() as u16 + 2;

        let [header_area, media_area, elapsed_area, controls_area] = Layout::vertical([
            Length(3),
            Length(media_height),
            Length(3),
            Length(3),
        ])
        .flex(Flex::Center)
        .areas(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                self.name.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Exercise {} of {}", self.position, self.total),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, header_area);

        let [media_area] = Layout::horizontal([Constraint::Max(60)])
            .flex(Flex::Center)
            .areas(media_area);
        let media = Paragraph::new(media_lines)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .title(" Demonstration ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(media, media_area);

        let elapsed = Paragraph::new(Line::from(Span::styled(
            format!("Elapsed Time: {} seconds", self.elapsed_seconds),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(elapsed, elapsed_area);

        let controls = Paragraph::new(vec![
            self.toggle_button(),
            button("n", "Next", Color::Blue),
            button("q", "Quit", Color::DarkGray),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(controls, controls_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    fn render_text(screen: &mut ExerciseScreen) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                screen.render(f, f.area());
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
    fn test_stopped_timer_offers_start() {
        let media = MediaStatus::Playing(PathBuf::from("/videos/squat.mp4"));
        let mut screen = ExerciseScreen {
            name: "Squat",
            position: 1,
            total: 4,
            elapsed_seconds: 0,
            is_running: false,
            media: &media,
            player_name: "mpv",
        };
        let text = render_text(&mut screen);
        assert!(text.contains("Squat"));
        assert!(text.contains("Exercise 1 of 4"));
        assert!(text.contains("Playing squat.mp4"));
        assert!(text.contains("Elapsed Time: 0 seconds"));
        assert!(text.contains("Start Exercise"));
        assert!(!text.contains("Done"));
    }

    #[test]
    fn test_running_timer_offers_done() {
        let media = MediaStatus::Idle;
        let mut screen = ExerciseScreen {
            name: "Burpee",
            position: 3,
            total: 4,
            elapsed_seconds: 17,
            is_running: true,
            media: &media,
            player_name: "none",
        };
        let text = render_text(&mut screen);
        assert!(text.contains("Elapsed Time: 17 seconds"));
        assert!(text.contains("Done"));
        assert!(!text.contains("Start Exercise"));
    }

    #[test]
    fn test_missing_video_renders_fallback() {
        let media = MediaStatus::NotFound("sun-salute".to_string());
        let mut screen = ExerciseScreen {
            name: "Sun Salute",
            position: 4,
            total: 4,
            elapsed_seconds: 0,
            is_running: false,
            media: &media,
            player_name: "none",
        };
        let text = render_text(&mut screen);
        assert!(text.contains("Video not found"));
        // Controls still render
        assert!(text.contains("Next"));
    }
}

//! # History Overlay
//!
//! Full-screen overlay listing every exercise logged since the app started.
//! Opened with `h` on the welcome screen, dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HistoryState` lives in `TuiState` and holds a snapshot of the log
//! - `History` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::exercise_log::ExerciseLogEntry;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const EMPTY_MESSAGE: &str = "No exercises completed yet.";

/// Persistent state for the history overlay.
pub struct HistoryState {
    pub entries: Vec<ExerciseLogEntry>,
    pub selected: usize,
    pub list_state: ListState,
}

impl HistoryState {
    pub fn new(entries: Vec<ExerciseLogEntry>) -> Self {
        let mut list_state = ListState::default();
        if !entries.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            entries,
            selected: 0,
            list_state,
        }
    }
}

/// Events emitted by the history overlay.
#[derive(Debug, PartialEq, Eq)]
pub enum HistoryEvent {
    Dismiss,
}

impl EventHandler for HistoryState {
    type Event = HistoryEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<HistoryEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('h') | TuiEvent::InputChar('q') => {
                Some(HistoryEvent::Dismiss)
            }
            TuiEvent::CursorUp => {
                if !self.entries.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.entries.is_empty() {
                    self.selected = (self.selected + 1).min(self.entries.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the history overlay.
pub struct History<'a> {
    state: &'a mut HistoryState,
}

impl<'a> History<'a> {
    pub fn new(state: &'a mut HistoryState) -> Self {
        Self { state }
    }
}

impl Component for History<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(80, 70, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Exercise History ",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" ↑↓ Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        if self.state.entries.is_empty() {
            let empty = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        // borders + padding
        let inner_width = overlay.width.saturating_sub(4) as usize;
        let number_width = self.state.entries.len().to_string().len();

        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let number = format!("{:>width$}. ", i + 1, width = number_width);
                let text = truncate_str(
                    &entry.to_string(),
                    inner_width.saturating_sub(number.len()),
                );
                ListItem::new(Line::from(vec![
                    Span::styled(number, style.add_modifier(Modifier::DIM)),
                    Span::styled(text, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Truncate to at most `max_width` display columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 3 {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

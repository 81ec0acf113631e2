use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CompletionScreen, ExerciseScreen, History, TitleBar, WelcomeScreen,
};
use crate::tui::playback::Playback;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, playback: &Playback) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let progress = app
        .current()
        .map(|_| (app.current_exercise + 1, app.exercise_count()));
    TitleBar::new(
        app.screen.label().to_string(),
        app.status_message.clone(),
        progress,
    )
    .render(frame, title_area);

    match app.screen {
        Screen::Welcome => {
            WelcomeScreen::new(app.exercise_count(), app.log.len()).render(frame, main_area);
        }
        Screen::Exercising => {
            if let Some(exercise) = app.current() {
                ExerciseScreen {
                    name: &exercise.name,
                    position: app.current_exercise + 1,
                    total: app.exercise_count(),
                    elapsed_seconds: app.timer.elapsed(),
                    is_running: app.timer.is_running(),
                    media: playback.status(),
                    player_name: playback.player_name(),
                }
                .render(frame, main_area);
            }
        }
        Screen::Completed => {
            let session_seconds = app.session_entries().iter().map(|e| e.elapsed_seconds).sum();
            CompletionScreen::new(session_seconds).render(frame, main_area);
        }
    }

    if let Some(ref mut history) = tui.history {
        History::new(history).render(frame, main_area);
    }
}

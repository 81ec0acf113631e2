//! # Actions
//!
//! Everything that can happen in a workout becomes an `Action`.
//! User presses Enter on the welcome screen? That's `Action::Start`.
//! A second passes while the timer runs? That's `Action::Tick`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` for the adapter to perform. Media
//! playback and terminal teardown happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Stopping the timer and logging its value happen inside a single
//! `update()` call, so no tick can land in between.

use log::{debug, info};

use crate::core::exercise_log::ExerciseLogEntry;
use crate::core::state::{App, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the welcome screen and begin with the first exercise.
    Start,
    /// "Start Exercise" when stopped, "Done" when running.
    ToggleTimer,
    /// Move on to the next exercise, or to the completion screen.
    Next,
    /// Return from the completion screen to the welcome screen.
    BackToHome,
    /// One second of wall-clock time has passed.
    Tick,
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show the demonstration for the given media reference.
    PlayMedia(String),
    StopMedia,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    if action != Action::Tick {
        debug!("update: {:?} on {:?}", action, app.screen);
    }

    match (app.screen, action) {
        (_, Action::Tick) => {
            if app.screen == Screen::Exercising {
                app.timer.tick();
            }
            Effect::None
        }

        (Screen::Exercising, Action::Quit) => {
            app.timer.stop();
            info!("Quit during exercise {}", app.current_exercise);
            Effect::Quit
        }
        (_, Action::Quit) => Effect::Quit,

        (Screen::Welcome, Action::Start) => {
            app.current_exercise = 0;
            app.session_start = app.log.len();
            app.screen = Screen::Exercising;
            begin_exercise(app)
        }

        (Screen::Exercising, Action::ToggleTimer) => {
            if app.timer.is_running() {
                app.timer.stop();
                log_current(app);
                app.status_message = format!("Logged {} seconds", app.timer.elapsed());
            } else {
                app.timer.start();
                app.logged_this_visit = false;
                app.status_message = String::from("Timer running");
                info!("Timer started for exercise {}", app.current_exercise);
            }
            Effect::None
        }

        (Screen::Exercising, Action::Next) => {
            app.timer.stop();
            if !app.logged_this_visit {
                log_current(app);
            }
            if app.is_last_exercise() {
                app.current_exercise = app.exercise_count();
                app.screen = Screen::Completed;
                app.timer.reset();
                app.status_message = String::from("All exercises complete");
                info!("Workout complete, {} entries logged", app.log.len());
                Effect::StopMedia
            } else {
                app.current_exercise += 1;
                begin_exercise(app)
            }
        }

        (Screen::Completed, Action::BackToHome) => {
            app.screen = Screen::Welcome;
            app.current_exercise = 0;
            app.timer.reset();
            app.logged_this_visit = false;
            app.status_message = String::from("Ready when you are");
            Effect::None
        }

        (screen, action) => {
            debug!("Ignoring {:?} on {:?}", action, screen);
            Effect::None
        }
    }
}

/// Enter the exercise at `current_exercise` with a stopped, zeroed timer.
fn begin_exercise(app: &mut App) -> Effect {
    app.timer.reset();
    app.logged_this_visit = false;
    match app.exercises.get(app.current_exercise) {
        Some(exercise) => {
            info!(
                "Exercise {}/{}: {}",
                app.current_exercise + 1,
                app.exercises.len(),
                exercise.name
            );
            app.status_message = format!("Up next: {}", exercise.name);
            Effect::PlayMedia(exercise.media.clone())
        }
        None => Effect::None,
    }
}

fn log_current(app: &mut App) {
    let Some(exercise) = app.exercises.get(app.current_exercise) else {
        return;
    };
    let entry = ExerciseLogEntry::new(exercise.name.clone(), app.timer.elapsed());
    info!("Logged: {}", entry);
    app.log.append(entry);
    app.logged_this_visit = true;
}

//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screens,
//! translates keyboard events into `core::Action` values and performs the
//! `Effect`s that `update()` returns.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Each iteration:
//!
//! 1. Draw if something changed.
//! 2. Poll for input, waiting at most until the next timer tick is due
//!    (or 500ms when the timer is stopped).
//! 3. `step()`: deliver due ticks first, so time that passed before a key
//!    press is counted before that key press is handled. Then notice a
//!    player that exited on its own, then dispatch the input events
//!    through `update()`.
//!
//! Everything runs on one thread. A "Done" press stops the timer and logs
//! it inside a single `update()` call, so no tick can slip in between.

mod component;
mod components;
mod event;
mod keymap;
pub mod playback;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen};
use crate::core::timer::TickSchedule;
use crate::tui::component::EventHandler;
use crate::tui::components::{HistoryEvent, HistoryState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::playback::Playback;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // History overlay (None = hidden)
    pub history: Option<HistoryState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self { history: None }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Restores the terminal on every exit path, including `?` returns.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> Self {
        if let Err(e) = execute!(stdout(), Hide) {
            warn!("Failed to hide cursor: {}", e);
        }
        info!("Terminal modes enabled (hidden cursor)");
        Self
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
        ratatui::restore();
    }
}

/// Run one action through the reducer and carry out its effect.
/// Returns true when the app should exit.
pub fn dispatch(
    app: &mut App,
    playback: &mut Playback,
    schedule: &mut TickSchedule,
    action: Action,
    now: Instant,
) -> bool {
    let effect = update(app, action);
    let quit = match effect {
        Effect::None => false,
        Effect::PlayMedia(reference) => {
            playback.show(&reference);
            false
        }
        Effect::StopMedia => {
            playback.stop();
            false
        }
        Effect::Quit => {
            playback.stop();
            true
        }
    };
    sync_schedule(app, schedule, now);
    quit
}

/// Keep the tick schedule armed exactly while the timer runs.
fn sync_schedule(app: &App, schedule: &mut TickSchedule, now: Instant) {
    match (app.timer.is_running(), schedule.is_armed()) {
        (true, false) => schedule.arm(now),
        (false, true) => schedule.clear(),
        _ => {}
    }
}

/// Route one input event: the history overlay first, then the key map.
/// Returns true when the app should exit.
pub fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    playback: &mut Playback,
    schedule: &mut TickSchedule,
    event: &TuiEvent,
    now: Instant,
) -> bool {
    // Ctrl+C always quits, even over the overlay
    if *event == TuiEvent::ForceQuit {
        return dispatch(app, playback, schedule, Action::Quit, now);
    }

    if let Some(ref mut history) = tui.history {
        if let Some(HistoryEvent::Dismiss) = history.handle_event(event) {
            tui.history = None;
        }
        return false;
    }

    if app.screen == Screen::Welcome && *event == TuiEvent::InputChar('h') {
        tui.history = Some(HistoryState::new(app.log.snapshot()));
        return false;
    }

    match keymap::action_for(app.screen, event) {
        Some(action) => dispatch(app, playback, schedule, action, now),
        None => false,
    }
}

/// What one pass of `step()` asks of the event loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub redraw: bool,
    pub quit: bool,
}

/// One loop iteration after polling: ticks due at `now`, then media
/// status, then `events` in order. Stops consuming events on quit.
pub fn step(
    app: &mut App,
    tui: &mut TuiState,
    playback: &mut Playback,
    schedule: &mut TickSchedule,
    events: impl IntoIterator<Item = TuiEvent>,
    now: Instant,
) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    let due = schedule.due(now);
    if due > 0 {
        debug!("Delivering {} tick(s)", due);
        for _ in 0..due {
            update(app, Action::Tick);
        }
        outcome.redraw = true;
    }

    if playback.refresh() {
        outcome.redraw = true;
    }

    for event in events {
        outcome.redraw = true;
        if handle_event(app, tui, playback, schedule, &event, now) {
            outcome.quit = true;
            break;
        }
    }

    outcome
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(config.exercises.clone());
    let mut tui = TuiState::new();
    let mut playback = Playback::from_config(&config);
    let mut schedule = TickSchedule::new();

    info!(
        "Starting workout: {} exercises, media in {}, player {}",
        app.exercise_count(),
        config.media_dir.display(),
        playback.player_name()
    );

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, &playback))?;
            needs_redraw = false;
        }

        let timeout = schedule
            .until_next(Instant::now())
            .map_or(IDLE_POLL, |until| until.min(IDLE_POLL));
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let events = first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate));
        let outcome = step(
            &mut app,
            &mut tui,
            &mut playback,
            &mut schedule,
            events,
            Instant::now(),
        );

        if outcome.quit {
            break;
        }
        needs_redraw |= outcome.redraw;
    }

    info!("Exiting with {} log entries", app.log.len());
    Ok(())
}

//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::core::exercise::default_exercises;
use crate::core::state::App;
use crate::media::{MediaError, MediaPlayer};

/// Creates a test App with the default four-exercise catalog.
pub fn test_app() -> App {
    App::new(default_exercises())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCall {
    Play(PathBuf),
    Stop,
}

/// A player that records calls instead of spawning anything.
pub struct RecordingPlayer {
    calls: Rc<RefCell<Vec<PlayerCall>>>,
    playing: bool,
}

impl RecordingPlayer {
    /// Returns the player and a handle for inspecting its calls after it
    /// has been boxed.
    pub fn new() -> (Self, Rc<RefCell<Vec<PlayerCall>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let player = Self {
            calls: calls.clone(),
            playing: false,
        };
        (player, calls)
    }
}

impl MediaPlayer for RecordingPlayer {
    fn name(&self) -> &str {
        "recording"
    }

    fn play(&mut self, path: &Path) -> Result<(), MediaError> {
        self.calls.borrow_mut().push(PlayerCall::Play(path.to_path_buf()));
        self.playing = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.calls.borrow_mut().push(PlayerCall::Stop);
        self.playing = false;
    }

    fn is_playing(&mut self) -> bool {
        self.playing
    }
}

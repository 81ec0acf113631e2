//! # Playback
//!
//! Carries out the controller's media effects: entering an exercise shows
//! its demonstration, leaving the exercise screen stops it. Resolution or
//! spawn failures are logged and turned into a `MediaStatus` for the
//! exercise screen; they never stop the workout.

use log::{info, warn};

use crate::core::config::ResolvedConfig;
use crate::media::{CommandPlayer, MediaLibrary, MediaPlayer, MediaStatus, NullPlayer};

pub struct Playback {
    library: MediaLibrary,
    player: Box<dyn MediaPlayer>,
    status: MediaStatus,
}

impl Playback {
    pub fn new(library: MediaLibrary, player: Box<dyn MediaPlayer>) -> Self {
        Self {
            library,
            player,
            status: MediaStatus::Idle,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let library = MediaLibrary::new(config.media_dir.clone(), config.extensions.clone());
        Self::new(library, build_player(config))
    }

    pub fn status(&self) -> &MediaStatus {
        &self.status
    }

    pub fn player_name(&self) -> &str {
        self.player.name()
    }

    /// Show the demonstration for `reference`, replacing any current one.
    pub fn show(&mut self, reference: &str) {
        self.player.stop();
        self.status = match self.library.resolve(reference) {
            Ok(path) => match self.player.play(&path) {
                Ok(()) if self.player.is_playing() => MediaStatus::Playing(path),
                Ok(()) => MediaStatus::Ready(path),
                Err(e) => {
                    warn!("{} ({})", e, self.player.name());
                    MediaStatus::Ready(path)
                }
            },
            // resolve() only reports missing files
            Err(e) => {
                warn!("{} in {}", e, self.library.dir().display());
                MediaStatus::NotFound(reference.to_string())
            }
        };
    }

    /// Downgrade `Playing` to `Ready` once the player has exited on its
    /// own. Returns true when the status changed.
    pub fn refresh(&mut self) -> bool {
        let MediaStatus::Playing(path) = &self.status else {
            return false;
        };
        if self.player.is_playing() {
            return false;
        }
        info!("{} is no longer playing", path.display());
        self.status = MediaStatus::Ready(path.clone());
        true
    }

    pub fn stop(&mut self) {
        self.player.stop();
        self.status = MediaStatus::Idle;
    }
}

/// Build a player from the resolved config's player command.
pub fn build_player(config: &ResolvedConfig) -> Box<dyn MediaPlayer> {
    match config.player_command.as_deref().and_then(CommandPlayer::new) {
        Some(player) => Box::new(player),
        None => Box::new(NullPlayer::new()),
    }
}

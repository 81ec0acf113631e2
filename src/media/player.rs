use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use log::{debug, info, warn};

use super::MediaError;

/// Plays one demonstration video at a time.
///
/// `play()` replaces whatever was playing before. `stop()` is idempotent.
pub trait MediaPlayer {
    /// Returns the name of the player.
    fn name(&self) -> &str;

    fn play(&mut self, path: &Path) -> Result<(), MediaError>;

    fn stop(&mut self);

    /// True while the last `play()` is still running. Takes `&mut self`
    /// so a player can notice that its video ended on its own.
    fn is_playing(&mut self) -> bool;
}

/// Used when no player command is configured. Tracks the requested file
/// so the UI can still show what would be playing.
#[derive(Debug, Default)]
pub struct NullPlayer {
    current: Option<PathBuf>,
}

impl NullPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MediaPlayer for NullPlayer {
    fn name(&self) -> &str {
        "none"
    }

    fn play(&mut self, path: &Path) -> Result<(), MediaError> {
        debug!("No player configured, not playing {}", path.display());
        self.current = Some(path.to_path_buf());
        Ok(())
    }

    fn stop(&mut self) {
        self.current = None;
    }

    fn is_playing(&mut self) -> bool {
        false
    }
}

/// Runs an external program (e.g. `mpv --loop`) with the video path
/// appended. The child is killed on `stop()` and on drop.
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
    child: Option<Child>,
}

impl CommandPlayer {
    /// Returns `None` for a blank command line.
    pub fn new(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
            child: None,
        })
    }

    fn command_for(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(path)
            // The terminal belongs to the TUI
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl MediaPlayer for CommandPlayer {
    fn name(&self) -> &str {
        &self.program
    }

    fn play(&mut self, path: &Path) -> Result<(), MediaError> {
        self.stop();
        let child = self.command_for(path).spawn().map_err(MediaError::Spawn)?;
        info!("Started {} (pid {}) for {}", self.program, child.id(), path.display());
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        let Some(mut child) = self.child.take() else {
            return;
        };
        if let Err(e) = child.kill() {
            // Already exited on its own
            debug!("Player pid {} kill: {}", child.id(), e);
        }
        if let Err(e) = child.wait() {
            warn!("Failed to reap player pid {}: {}", child.id(), e);
        }
        info!("Stopped {}", self.program);
    }

    fn is_playing(&mut self) -> bool {
        let Some(child) = self.child.as_mut() else {
            return false;
        };
        match child.try_wait() {
            Ok(None) => true,
            Ok(Some(status)) => {
                info!("{} exited on its own ({})", self.program, status);
                self.child = None;
                false
            }
            Err(e) => {
                warn!("Failed to check player pid {}: {}", child.id(), e);
                true
            }
        }
    }
}

impl Drop for CommandPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_player_parses_command_line() {
        let mut player = CommandPlayer::new("mpv --loop  --really-quiet").unwrap();
        assert_eq!(player.name(), "mpv");
        assert_eq!(player.args, vec!["--loop", "--really-quiet"]);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_blank_command_line_is_none() {
        assert!(CommandPlayer::new("").is_none());
        assert!(CommandPlayer::new("   ").is_none());
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let mut player = CommandPlayer::new("workout-test-no-such-player-binary").unwrap();
        let result = player.play(Path::new("squat.mp4"));
        assert!(matches!(result, Err(MediaError::Spawn(_))));
        assert!(!player.is_playing());
    }

    #[test]
    fn test_stop_without_play_is_noop() {
        let mut player = CommandPlayer::new("mpv").unwrap();
        player.stop();
        player.stop();
        assert!(!player.is_playing());
    }

    #[cfg(unix)]
    #[test]
    fn test_play_then_stop_kills_child() {
        let mut player = CommandPlayer::new("sleep").unwrap();
        // `sleep <path>` fails fast on a non-numeric arg, so use a numeric "path"
        player.play(Path::new("30")).unwrap();
        assert!(player.is_playing());
        player.stop();
        assert!(!player.is_playing());
    }

    #[cfg(unix)]
    #[test]
    fn test_exited_child_is_not_playing() {
        let mut player = CommandPlayer::new("true").unwrap();
        player.play(Path::new("squat.mp4")).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(300));
        assert!(!player.is_playing());
        // Reaped, so there is nothing left for stop() to kill
        assert!(player.child.is_none());
        player.stop();
    }

    #[test]
    fn test_null_player_never_plays() {
        let mut player = NullPlayer::new();
        player.play(Path::new("squat.mp4")).unwrap();
        assert!(!player.is_playing());
        assert_eq!(player.current.as_deref(), Some(Path::new("squat.mp4")));
        player.stop();
        assert!(player.current.is_none());
    }
}

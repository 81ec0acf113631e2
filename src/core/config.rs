//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.workout/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The log file is the one setting outside the file: loading the config
//! logs, so the logger has to exist first. See `log_file_path()`.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::exercise::{ExerciseDefinition, default_exercises};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WorkoutConfig {
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MediaConfig {
    pub dir: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub player: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExerciseEntry {
    pub name: String,
    pub media: String,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MEDIA_DIR: &str = "media";
pub const DEFAULT_EXTENSION: &str = "mp4";
pub const DEFAULT_LOG_FILE: &str = "workout.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub media_dir: PathBuf,
    pub extensions: Vec<String>,
    /// Shell-style command line; the video path is appended as the last argument.
    pub player_command: Option<String>,
    pub exercises: Vec<ExerciseDefinition>,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub media_dir: Option<PathBuf>,
    pub player: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.workout/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".workout").join("config.toml"))
}

/// Load config from `~/.workout/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WorkoutConfig::default()`.
pub fn load_config() -> Result<WorkoutConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(WorkoutConfig::default())
        }
    }
}

/// Load config from an explicit path. A missing file yields the defaults
/// (and a generated template); a malformed one is `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<WorkoutConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(WorkoutConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WorkoutConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Workout Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [media]
# dir = "media"                      # Folder holding the demonstration videos
# extensions = ["mp4"]               # Tried in order when resolving a video
# player = "mpv --loop --really-quiet"

# [[exercises]]
# name = "Squat"
# media = "squat"                    # Resolved as <dir>/squat.mp4

# [[exercises]]
# name = "Step Up"
# media = "step-up"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Where the debug log goes: `--log-file`, else `workout.log` in the
/// working directory. Needs no config file so the logger can start before
/// the config is loaded.
pub fn log_file_path(cli: Option<&Path>) -> PathBuf {
    cli.map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), Path::to_path_buf)
}

/// Resolve the final config by collapsing: defaults → config file → CLI.
pub fn resolve(config: &WorkoutConfig, cli: &CliOverrides) -> ResolvedConfig {
    let media_dir = cli
        .media_dir
        .clone()
        .or_else(|| config.media.dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_DIR));

    // Extensions are stored without the leading dot
    let extensions: Vec<String> = config
        .media
        .extensions
        .iter()
        .flatten()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect();
    let extensions = if extensions.is_empty() {
        vec![DEFAULT_EXTENSION.to_string()]
    } else {
        extensions
    };

    let player_command = cli
        .player
        .clone()
        .or_else(|| config.media.player.clone())
        .filter(|cmd| !cmd.trim().is_empty());

    let exercises = if config.exercises.is_empty() {
        default_exercises()
    } else {
        config
            .exercises
            .iter()
            .map(|e| ExerciseDefinition::new(e.name.clone(), e.media.clone()))
            .collect()
    };

    ResolvedConfig {
        media_dir,
        extensions,
        player_command,
        exercises,
    }
}

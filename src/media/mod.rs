//! # Media
//!
//! Demonstration videos: finding them on disk and handing them to a player.
//!
//! - [`library`]: resolves an exercise's media reference to a file
//! - [`player`]: the `MediaPlayer` trait and its implementations
//!
//! A missing video is never fatal. The exercise screen shows a
//! "Video not found" panel and the timer keeps working.

pub mod library;
pub mod player;

pub use library::{MediaLibrary, MediaStatus};
pub use player::{CommandPlayer, MediaPlayer, NullPlayer};

use std::fmt;

#[derive(Debug)]
pub enum MediaError {
    /// No file matched the reference in the media directory.
    NotFound(String),
    /// The player command could not be started.
    Spawn(std::io::Error),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::NotFound(reference) => write!(f, "video not found: {reference}"),
            MediaError::Spawn(e) => write!(f, "failed to start player: {e}"),
        }
    }
}

impl std::error::Error for MediaError {}

use std::path::{Path, PathBuf};

use log::debug;

use super::MediaError;

/// What the exercise screen shows in place of the video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaStatus {
    /// Nothing requested yet (welcome and completion screens).
    Idle,
    Playing(PathBuf),
    /// Resolved, but no player is configured or it failed to start.
    Ready(PathBuf),
    NotFound(String),
}

/// Resolves media references like `"step-up"` to files like
/// `<dir>/step-up.mp4`, trying each extension in order.
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    dir: PathBuf,
    extensions: Vec<String>,
}

impl MediaLibrary {
    pub fn new(dir: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            dir: dir.into(),
            extensions,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn resolve(&self, reference: &str) -> Result<PathBuf, MediaError> {
        // References are bare names; anything path-like is rejected
        if reference.is_empty() || reference.contains(['/', '\\']) || reference == ".." {
            return Err(MediaError::NotFound(reference.to_string()));
        }

        for ext in &self.extensions {
            let candidate = self.dir.join(format!("{reference}.{ext}"));
            if candidate.is_file() {
                debug!("Resolved {} to {}", reference, candidate.display());
                return Ok(candidate);
            }
        }
        Err(MediaError::NotFound(reference.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("workout-media-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_resolve_existing_file() {
        let dir = scratch_dir("existing");
        fs::write(dir.join("squat.mp4"), b"").unwrap();

        let library = MediaLibrary::new(&dir, vec!["mp4".to_string()]);
        assert_eq!(library.resolve("squat").unwrap(), dir.join("squat.mp4"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_resolve_tries_extensions_in_order() {
        let dir = scratch_dir("ordered");
        fs::write(dir.join("burpee.webm"), b"").unwrap();
        fs::write(dir.join("burpee.mp4"), b"").unwrap();

        let library = MediaLibrary::new(&dir, vec!["webm".to_string(), "mp4".to_string()]);
        assert_eq!(library.resolve("burpee").unwrap(), dir.join("burpee.webm"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = scratch_dir("missing");
        let library = MediaLibrary::new(&dir, vec!["mp4".to_string()]);
        match library.resolve("sun-salute") {
            Err(MediaError::NotFound(reference)) => assert_eq!(reference, "sun-salute"),
            other => panic!("expected NotFound, got {other:?}"),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_path_like_reference_is_rejected() {
        let library = MediaLibrary::new("/", vec!["mp4".to_string()]);
        assert!(library.resolve("../etc/passwd").is_err());
        assert!(library.resolve("").is_err());
    }
}

//! # Exercise Log
//!
//! Append-only record of finished exercises, in the order they were finished.
//! Entries are never edited or removed; the log lives for the whole process.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogEntry {
    pub exercise_name: String,
    pub elapsed_seconds: u64,
}

impl ExerciseLogEntry {
    pub fn new(exercise_name: impl Into<String>, elapsed_seconds: u64) -> Self {
        Self {
            exercise_name: exercise_name.into(),
            elapsed_seconds,
        }
    }
}

impl fmt::Display for ExerciseLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} seconds", self.exercise_name, self.elapsed_seconds)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExerciseLog {
    entries: Vec<ExerciseLogEntry>,
}

impl ExerciseLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: ExerciseLogEntry) {
        self.entries.push(entry);
    }

    /// Borrowed view of every entry, oldest first.
    pub fn all(&self) -> &[ExerciseLogEntry] {
        &self.entries
    }

    /// Owned copy; later appends are not visible through it.
    pub fn snapshot(&self) -> Vec<ExerciseLogEntry> {
        self.entries.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

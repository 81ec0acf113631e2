//! The ordered exercise catalog walked through in every session.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDefinition {
    pub name: String,
    /// Media lookup key, resolved to a video file by the media library.
    pub media: String,
}

impl ExerciseDefinition {
    pub fn new(name: impl Into<String>, media: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media: media.into(),
        }
    }
}

pub fn default_exercises() -> Vec<ExerciseDefinition> {
    vec![
        ExerciseDefinition::new("Squat", "squat"),
        ExerciseDefinition::new("Step Up", "step-up"),
        ExerciseDefinition::new("Burpee", "burpee"),
        ExerciseDefinition::new("Sun Salute", "sun-salute"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let names: Vec<String> = default_exercises().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Squat", "Step Up", "Burpee", "Sun Salute"]);
    }

    #[test]
    fn test_default_catalog_media_keys() {
        let media: Vec<String> = default_exercises().into_iter().map(|e| e.media).collect();
        assert_eq!(media, vec!["squat", "step-up", "burpee", "sun-salute"]);
    }
}

//! # Catalog Types
//!
//! The read-only domain data the app browses: scales and lessons.
//! Field names match the JSON records in `data/`.
//!
//! Parsing is lenient per record: a missing or `null` field takes its empty
//! value, and out-of-range frets or strings load fine and are simply never
//! drawn. Only JSON that isn't a list of objects fails the whole file.

use serde::{Deserialize, Deserializer, Serialize};

/// A guitar scale with its notes and fretboard positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub positions: Vec<Position>,
}

/// One fret marked on a set of strings.
///
/// String indices run low-to-high (0 = low E, 5 = high e). Values are
/// signed so that bad data still parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, deserialize_with = "null_as_default")]
    pub fret: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub strings: Vec<i64>,
}

impl Position {
    pub fn marks(&self, string: usize, fret: usize) -> bool {
        let (Ok(string), Ok(fret)) = (i64::try_from(string), i64::try_from(fret)) else {
            return false;
        };
        self.fret == fret && self.strings.contains(&string)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Free text; usually one of "beginner", "intermediate", "advanced".
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exercises: Vec<Exercise>,
}

impl Lesson {
    /// Parses the free-text level. Unknown labels return `None` and are
    /// still shown verbatim by the views.
    pub fn level_kind(&self) -> Option<LessonLevel> {
        LessonLevel::parse(&self.level)
    }
}

/// A practice item attached to a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

/// Reads `null` as the type's empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl LessonLevel {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_parses_from_json() {
        let json = r#"{
            "name": "A Minor Pentatonic",
            "notes": ["A", "C", "D", "E", "G"],
            "positions": [{"fret": 5, "strings": [0, 5]}]
        }"#;
        let scale: Scale = serde_json::from_str(json).unwrap();
        assert_eq!(scale.name, "A Minor Pentatonic");
        assert_eq!(scale.notes.len(), 5);
        assert_eq!(scale.positions[0].fret, 5);
        assert_eq!(scale.positions[0].strings, vec![0, 5]);
    }

    #[test]
    fn test_out_of_range_values_still_parse() {
        let json = r#"[
            {"name": "Odd", "positions": [{"fret": -1, "strings": [0, -3]}, {"fret": 99, "strings": [7]}]},
            {"name": "Fine", "positions": [{"fret": 2, "strings": [1]}]}
        ]"#;
        let scales: Vec<Scale> = serde_json::from_str(json).unwrap();
        assert_eq!(scales.len(), 2);
        assert_eq!(scales[0].positions[0].fret, -1);
        assert_eq!(scales[0].positions[0].strings, vec![0, -3]);
        assert!(!scales[0].positions[0].marks(0, 0));
        assert!(scales[1].positions[0].marks(1, 2));
    }

    #[test]
    fn test_missing_and_null_fields_take_empty_values() {
        let json = r#"[
            {"id": "l1", "level": null, "exercises": null},
            {"id": "l2", "title": "Bends", "exercises": [{"type": null, "content": "Half step"}]}
        ]"#;
        let lessons: Vec<Lesson> = serde_json::from_str(json).unwrap();
        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].title, "");
        assert_eq!(lessons[0].level, "");
        assert!(lessons[0].exercises.is_empty());
        assert_eq!(lessons[1].exercises[0].kind, "");

        let scales: Vec<Scale> =
            serde_json::from_str(r#"[{"name": "C", "notes": null, "positions": [{"strings": null}]}]"#)
                .unwrap();
        assert!(scales[0].notes.is_empty());
        assert_eq!(scales[0].positions[0], Position { fret: 0, strings: vec![] });
    }

    #[test]
    fn test_non_record_json_is_rejected() {
        assert!(serde_json::from_str::<Vec<Scale>>(r#"{"name": "not a list"}"#).is_err());
        assert!(serde_json::from_str::<Vec<Lesson>>(r#"[{"title": 5}]"#).is_err());
    }

    #[test]
    fn test_lesson_exercises_default_to_empty() {
        let json = r#"{"id": "l1", "title": "Open Chords", "level": "beginner", "content": "..."}"#;
        let lesson: Lesson = serde_json::from_str(json).unwrap();
        assert!(lesson.exercises.is_empty());
        assert_eq!(lesson.level_kind(), Some(LessonLevel::Beginner));
    }

    #[test]
    fn test_exercise_type_field_is_renamed() {
        let json = r#"{"type": "drill", "content": "Play it slowly"}"#;
        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(exercise.kind, "drill");
    }

    #[test]
    fn test_level_parse_is_case_insensitive() {
        assert_eq!(LessonLevel::parse(" Advanced "), Some(LessonLevel::Advanced));
        assert_eq!(LessonLevel::parse("INTERMEDIATE"), Some(LessonLevel::Intermediate));
        assert_eq!(LessonLevel::parse("expert"), None);
    }

    #[test]
    fn test_position_marks() {
        let pos = Position { fret: 3, strings: vec![1, 4] };
        assert!(pos.marks(1, 3));
        assert!(pos.marks(4, 3));
        assert!(!pos.marks(0, 3));
        assert!(!pos.marks(1, 2));
    }
}

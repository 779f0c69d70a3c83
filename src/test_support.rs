//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::catalog::{CatalogError, CatalogSource, Exercise, Lesson, Position, Scale};
use crate::core::state::App;
use crate::obs::{ObsEvent, Observer};

/// A source that hands back fixed records without touching disk.
pub struct StaticSource {
    scales: Vec<Scale>,
    lessons: Vec<Lesson>,
}

impl StaticSource {
    pub fn new(scales: Vec<Scale>, lessons: Vec<Lesson>) -> Self {
        Self { scales, lessons }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn load_scales(&self) -> Result<Vec<Scale>, CatalogError> {
        Ok(self.scales.clone())
    }

    async fn load_lessons(&self) -> Result<Vec<Lesson>, CatalogError> {
        Ok(self.lessons.clone())
    }
}

/// Keeps every event it sees, in order.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ObsEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<ObsEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Observer for RecordingObserver {
    fn record(&self, event: ObsEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn sample_scales() -> Vec<Scale> {
    vec![
        Scale {
            name: "C Major".to_string(),
            notes: ["C", "D", "E", "F", "G", "A", "B"].map(String::from).to_vec(),
            positions: vec![
                Position { fret: 0, strings: vec![2, 3, 4] },
                Position { fret: 3, strings: vec![1] },
            ],
        },
        Scale {
            name: "A Minor Pentatonic".to_string(),
            notes: ["A", "C", "D", "E", "G"].map(String::from).to_vec(),
            positions: vec![
                Position { fret: 5, strings: vec![0, 1, 2, 3, 4, 5] },
                Position { fret: 8, strings: vec![0, 5] },
            ],
        },
    ]
}

pub fn sample_lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: "open-chords".to_string(),
            title: "Open Chords".to_string(),
            level: "beginner".to_string(),
            content: "Learn C, G and D in open position.".to_string(),
            exercises: vec![],
        },
        Lesson {
            id: "alternate-picking".to_string(),
            title: "Alternate Picking".to_string(),
            level: "intermediate".to_string(),
            content: "Strict down-up picking.\nStart at 60 bpm.".to_string(),
            exercises: vec![Exercise {
                kind: "drill".to_string(),
                content: "Chromatic 1-2-3-4 on every string".to_string(),
            }],
        },
    ]
}

/// Creates a test App at the menu with both sample catalogs loaded.
pub fn test_app() -> App {
    App {
        scales: sample_scales(),
        lessons: sample_lessons(),
        ..App::new()
    }
}

//! # Application State
//!
//! Navigation state plus the two catalogs it browses. No TUI types here;
//! presentation lives in the `tui` module.
//!
//! ```text
//! App
//! ├── view: View              // which screen is active
//! ├── cursor: usize           // highlighted row of the active list
//! ├── selected_index: usize   // catalog index committed on list → detail
//! ├── scales: Vec<Scale>      // empty until the loader delivers
//! └── lessons: Vec<Lesson>    // empty until the loader delivers
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::catalog::{Lesson, Scale};

/// Number of entries in the main menu.
pub const MENU_ITEMS: usize = 3;

/// The five mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Menu,
    ScaleList,
    LessonList,
    ScaleDetail,
    LessonDetail,
}

impl View {
    pub const COUNT: usize = 5;

    pub const ALL: [View; View::COUNT] = [
        View::Menu,
        View::ScaleList,
        View::LessonList,
        View::ScaleDetail,
        View::LessonDetail,
    ];

    /// Stable position in [`View::ALL`].
    pub fn index(self) -> usize {
        match self {
            View::Menu => 0,
            View::ScaleList => 1,
            View::LessonList => 2,
            View::ScaleDetail => 3,
            View::LessonDetail => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Menu => "menu",
            View::ScaleList => "scales_list",
            View::LessonList => "lessons_list",
            View::ScaleDetail => "scale_detail",
            View::LessonDetail => "lesson_detail",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct App {
    pub view: View,
    pub cursor: usize,
    /// Set only on a list → detail transition; survives later loads.
    pub selected_index: usize,
    pub scales: Vec<Scale>,
    pub lessons: Vec<Lesson>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row count used to clamp the cursor in the active view.
    /// Detail views report 1: there is nothing to move between.
    pub fn max_items(&self) -> usize {
        match self.view {
            View::Menu => MENU_ITEMS,
            View::ScaleList => self.scales.len(),
            View::LessonList => self.lessons.len(),
            View::ScaleDetail | View::LessonDetail => 1,
        }
    }

    /// The scale shown in `ScaleDetail`, if `selected_index` is still in range.
    pub fn selected_scale(&self) -> Option<&Scale> {
        self.scales.get(self.selected_index)
    }

    pub fn selected_lesson(&self) -> Option<&Lesson> {
        self.lessons.get(self.selected_index)
    }
}

//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses Enter? That's `Action::Select`.
//! Scales finished loading? That's `Action::ScalesLoaded(scales)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the event loop to carry out.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Every transition is total: the cursor is clamped rather than asserted,
//! and catalog indexing is guarded, so an empty catalog never panics.

use crate::catalog::{Lesson, Scale};
use crate::core::state::{App, MENU_ITEMS, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Select,
    Back,
    Quit,
    ScalesLoaded(Vec<Scale>),
    LessonsLoaded(Vec<Lesson>),
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// Menu rows, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Scales,
    Lessons,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; MENU_ITEMS] = [MenuItem::Scales, MenuItem::Lessons, MenuItem::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Scales => "View Scales",
            MenuItem::Lessons => "View Lessons",
            MenuItem::Quit => "Quit",
        }
    }
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,
        Action::Up => {
            app.cursor = app.cursor.saturating_sub(1);
            Effect::None
        }
        Action::Down => {
            if app.cursor + 1 < app.max_items() {
                app.cursor += 1;
            }
            Effect::None
        }
        Action::Select => select(app),
        Action::Back => {
            if app.view != View::Menu {
                app.view = View::Menu;
                app.cursor = 0;
            }
            Effect::None
        }
        Action::ScalesLoaded(scales) => {
            app.scales = scales;
            Effect::None
        }
        Action::LessonsLoaded(lessons) => {
            app.lessons = lessons;
            Effect::None
        }
    }
}

fn select(app: &mut App) -> Effect {
    match app.view {
        View::Menu => match MenuItem::ALL.get(app.cursor) {
            Some(MenuItem::Scales) => {
                app.view = View::ScaleList;
                app.cursor = 0;
                Effect::None
            }
            Some(MenuItem::Lessons) => {
                app.view = View::LessonList;
                app.cursor = 0;
                Effect::None
            }
            Some(MenuItem::Quit) => Effect::Quit,
            None => Effect::None,
        },
        View::ScaleList => {
            if app.cursor < app.scales.len() {
                app.selected_index = app.cursor;
                app.view = View::ScaleDetail;
            }
            Effect::None
        }
        View::LessonList => {
            if app.cursor < app.lessons.len() {
                app.selected_index = app.cursor;
                app.view = View::LessonDetail;
            }
            Effect::None
        }
        View::ScaleDetail | View::LessonDetail => Effect::None,
    }
}

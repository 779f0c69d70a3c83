//! # TitleBar Component
//!
//! Top status bar showing where the user is and how much catalog is loaded.
//!
//! ## Responsibilities
//!
//! - Display the current section (Menu, Scales, Lessons, ...)
//! - Display catalog sizes, which tick up as the background loads land
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.view, app.scales.len(), app.lessons.len());
//! title_bar.render(frame, area);
//! ```
//!
//! The counts say nothing about whether a load failed. A failed load and an
//! empty record look the same to the user.

use crate::core::state::View;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Top status bar component showing the section and catalog sizes.
pub struct TitleBar {
    pub view: View,
    pub scale_count: usize,
    pub lesson_count: usize,
}

impl TitleBar {
    pub fn new(view: View, scale_count: usize, lesson_count: usize) -> Self {
        Self {
            view,
            scale_count,
            lesson_count,
        }
    }

    pub fn text(&self) -> String {
        format!(
            "Guitar Trainer | {} | {} · {}",
            section_name(self.view),
            plural(self.scale_count, "scale"),
            plural(self.lesson_count, "lesson"),
        )
    }
}

fn section_name(view: View) -> &'static str {
    match view {
        View::Menu => "Menu",
        View::ScaleList => "Scales",
        View::LessonList => "Lessons",
        View::ScaleDetail => "Scale",
        View::LessonDetail => "Lesson",
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

impl Component for TitleBar {
    /// Always a single line: plain Span, no Block.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.text(), Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}

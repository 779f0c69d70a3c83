//! # View Dispatcher
//!
//! Maps the current `App` to the text of one frame. Pure: reads state,
//! never mutates it, and does no I/O, so it can be tested without a
//! terminal. Every view ends with a help line for its keys.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthStr;

use crate::catalog::{Lesson, LessonLevel, Scale};
use crate::core::action::MenuItem;
use crate::core::fretboard::Fretboard;
use crate::core::state::{App, View};

pub const APP_TITLE: &str = "🎸 Guitar Training";
pub const NO_SCALES: &str = "No scales loaded.";
pub const NO_LESSONS: &str = "No lessons loaded.";
pub const SCALE_NOT_FOUND: &str = "Scale not found";
pub const LESSON_NOT_FOUND: &str = "Lesson not found";

const SELECTED_PREFIX: &str = "> ";
const UNSELECTED_PREFIX: &str = "  ";

fn title_style() -> Style {
    Style::default()
        .fg(Color::Indexed(63))
        .add_modifier(Modifier::BOLD)
}

fn selected_style() -> Style {
    Style::default()
        .fg(Color::Indexed(205))
        .add_modifier(Modifier::BOLD)
}

fn text_style() -> Style {
    Style::default().fg(Color::Indexed(252))
}

fn help_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn render(app: &App) -> Text<'static> {
    let mut lines = match app.view {
        View::Menu => render_menu(app.cursor),
        View::ScaleList => render_scale_list(&app.scales, app.cursor),
        View::LessonList => render_lesson_list(&app.lessons, app.cursor),
        View::ScaleDetail => render_scale_detail(app.selected_scale()),
        View::LessonDetail => render_lesson_detail(app.selected_lesson()),
    };
    lines.push(Line::default());
    lines.push(Line::styled(help_text(app.view), help_style()));
    Text::from(lines)
}

pub fn help_text(view: View) -> &'static str {
    match view {
        View::Menu => "Use ↑/↓ to navigate, Enter to select, q to quit",
        View::ScaleList | View::LessonList => {
            "Use ↑/↓ to navigate, Enter to view details, Esc to go back"
        }
        View::ScaleDetail | View::LessonDetail => "Press Esc to go back, q to quit",
    }
}

/// Title line, an underline matching its display width, and a spacer.
fn heading(title: &str) -> Vec<Line<'static>> {
    vec![
        Line::styled(title.to_string(), title_style()),
        Line::styled("─".repeat(title.width()), title_style()),
        Line::default(),
    ]
}

fn list_row(label: String, selected: bool) -> Line<'static> {
    if selected {
        Line::styled(format!("{SELECTED_PREFIX}{label}"), selected_style())
    } else {
        Line::raw(format!("{UNSELECTED_PREFIX}{label}"))
    }
}

fn render_menu(cursor: usize) -> Vec<Line<'static>> {
    let mut lines = heading(APP_TITLE);
    lines.extend(
        MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| list_row(item.label().to_string(), i == cursor)),
    );
    lines
}

fn render_scale_list(scales: &[Scale], cursor: usize) -> Vec<Line<'static>> {
    let mut lines = heading("Guitar Scales");
    if scales.is_empty() {
        lines.push(Line::styled(NO_SCALES, text_style()));
        return lines;
    }
    lines.extend(
        scales
            .iter()
            .enumerate()
            .map(|(i, scale)| list_row(scale.name.clone(), i == cursor)),
    );
    lines
}

fn render_lesson_list(lessons: &[Lesson], cursor: usize) -> Vec<Line<'static>> {
    let mut lines = heading("Guitar Lessons");
    if lessons.is_empty() {
        lines.push(Line::styled(NO_LESSONS, text_style()));
        return lines;
    }
    for (i, lesson) in lessons.iter().enumerate() {
        if i == cursor {
            lines.push(list_row(
                format!("{} [{}]", lesson.title, lesson.level),
                true,
            ));
        } else {
            lines.push(Line::from(vec![
                Span::raw(format!("{UNSELECTED_PREFIX}{} ", lesson.title)),
                Span::styled(format!("[{}]", lesson.level), level_style(lesson)),
            ]));
        }
    }
    lines
}

fn level_style(lesson: &Lesson) -> Style {
    match lesson.level_kind() {
        Some(LessonLevel::Beginner) => Style::default().fg(Color::Green),
        Some(LessonLevel::Intermediate) => Style::default().fg(Color::Yellow),
        Some(LessonLevel::Advanced) => Style::default().fg(Color::Red),
        None => text_style(),
    }
}

fn render_scale_detail(scale: Option<&Scale>) -> Vec<Line<'static>> {
    let Some(scale) = scale else {
        return vec![Line::styled(SCALE_NOT_FOUND, text_style())];
    };
    let mut lines = heading(&scale.name);
    lines.push(Line::styled(
        format!("Notes: {}", scale.notes.join(" ")),
        text_style(),
    ));
    lines.push(Line::default());
    lines.push(Line::styled("Fretboard:", text_style()));
    lines.extend(
        Fretboard::from_scale(scale)
            .render_lines()
            .into_iter()
            .map(|line| Line::styled(line, text_style())),
    );
    lines
}

fn render_lesson_detail(lesson: Option<&Lesson>) -> Vec<Line<'static>> {
    let Some(lesson) = lesson else {
        return vec![Line::styled(LESSON_NOT_FOUND, text_style())];
    };
    let mut lines = heading(&lesson.title);
    lines.push(Line::from(vec![
        Span::styled("Level: ", text_style()),
        Span::styled(lesson.level.clone(), level_style(lesson)),
    ]));
    lines.push(Line::default());
    lines.extend(
        lesson
            .content
            .lines()
            .map(|line| Line::styled(line.to_string(), text_style())),
    );
    if !lesson.exercises.is_empty() {
        lines.push(Line::default());
        lines.push(Line::styled("Exercises:", title_style()));
        lines.extend(lesson.exercises.iter().map(|exercise| {
            Line::styled(
                format!("  - [{}] {}", exercise.kind, exercise.content),
                text_style(),
            )
        }));
    }
    lines
}

/// Flattens a frame to plain text, one `\n`-terminated row per line.
pub fn to_plain(text: &Text<'_>) -> String {
    let mut out = String::new();
    for line in &text.lines {
        for span in &line.spans {
            out.push_str(&span.content);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Position;
    use crate::core::fretboard::{EMPTY_CELL, MARKED_CELL};
    use crate::test_support::test_app;

    fn plain(app: &App) -> String {
        to_plain(&render(app))
    }

    #[test]
    fn test_menu_marks_cursor_row() {
        let mut app = test_app();
        app.cursor = 1;
        let frame = plain(&app);
        assert!(frame.contains(APP_TITLE));
        assert!(frame.contains("  View Scales\n"));
        assert!(frame.contains("> View Lessons\n"));
        assert!(frame.contains("  Quit\n"));
        assert!(frame.ends_with(&format!("{}\n", help_text(View::Menu))));
    }

    #[test]
    fn test_empty_scale_list_shows_no_data_message() {
        let mut app = App::new();
        app.view = View::ScaleList;
        let frame = plain(&app);
        assert!(frame.contains(NO_SCALES));
        assert!(frame.contains(help_text(View::ScaleList)));
    }

    #[test]
    fn test_empty_lesson_list_shows_no_data_message() {
        let mut app = App::new();
        app.view = View::LessonList;
        assert!(plain(&app).contains(NO_LESSONS));
    }

    #[test]
    fn test_scale_list_rows() {
        let mut app = test_app();
        app.view = View::ScaleList;
        app.cursor = 1;
        let frame = plain(&app);
        assert!(frame.contains("  C Major\n"));
        assert!(frame.contains("> A Minor Pentatonic\n"));
        assert!(!frame.contains(NO_SCALES));
    }

    #[test]
    fn test_lesson_list_rows_include_level() {
        let mut app = test_app();
        app.view = View::LessonList;
        let frame = plain(&app);
        assert!(frame.contains("> Open Chords [beginner]\n"));
        assert!(frame.contains("  Alternate Picking [intermediate]\n"));
    }

    #[test]
    fn test_scale_detail_single_open_position() {
        let mut app = App::new();
        app.scales = vec![Scale {
            name: "One Note".to_string(),
            notes: vec!["E".to_string()],
            positions: vec![Position {
                fret: 0,
                strings: vec![0],
            }],
        }];
        app.view = View::ScaleDetail;
        let frame = plain(&app);

        assert!(frame.contains("Notes: E\n"));
        assert!(frame.contains("Fretboard:\n"));
        assert_eq!(frame.matches(MARKED_CELL).count(), 1);
        assert_eq!(frame.matches(EMPTY_CELL).count(), 77);
        assert!(frame.contains(&format!("E|{MARKED_CELL}{}", EMPTY_CELL.repeat(12))));
    }

    #[test]
    fn test_scale_detail_out_of_range_shows_not_found() {
        let mut app = test_app();
        app.view = View::ScaleDetail;
        app.selected_index = 5;
        let frame = plain(&app);
        assert!(frame.starts_with(SCALE_NOT_FOUND));
        assert!(frame.contains(help_text(View::ScaleDetail)));
    }

    #[test]
    fn test_lesson_detail_body_and_exercises() {
        let mut app = test_app();
        app.view = View::LessonDetail;
        app.selected_index = 1;
        let frame = plain(&app);
        assert!(frame.contains("Alternate Picking\n"));
        assert!(frame.contains("Level: intermediate\n"));
        assert!(frame.contains("Strict down-up picking.\nStart at 60 bpm.\n"));
        assert!(frame.contains("Exercises:\n"));
        assert!(frame.contains("  - [drill] Chromatic 1-2-3-4 on every string\n"));
    }

    #[test]
    fn test_lesson_detail_without_exercises_omits_heading() {
        let mut app = test_app();
        app.view = View::LessonDetail;
        assert!(!plain(&app).contains("Exercises:"));
    }

    #[test]
    fn test_lesson_detail_after_catalog_emptied() {
        let mut app = test_app();
        app.view = View::LessonDetail;
        app.lessons.clear();
        assert!(plain(&app).starts_with(LESSON_NOT_FOUND));
    }

    #[test]
    fn test_heading_underline_matches_display_width() {
        let lines = heading(APP_TITLE);
        assert_eq!(lines[1].width(), APP_TITLE.width());
    }

    #[test]
    fn test_render_does_not_mutate_state() {
        let mut app = test_app();
        app.view = View::ScaleList;
        app.cursor = 1;
        let before = app.clone();
        let _ = render(&app);
        assert_eq!(app, before);
    }
}

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::TitleBar;
use crate::tui::view;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    TitleBar::new(app.view, app.scales.len(), app.lessons.len()).render(frame, title_area);

    // Wrap without trimming so the fretboard rows and list indents keep their spacing.
    let body = Paragraph::new(view::render(app))
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)))
        .wrap(Wrap { trim: false });
    frame.render_widget(body, main_area);
}

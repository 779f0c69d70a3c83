//! # TUI Components
//!
//! Stateless display components that receive all data as props.
//!
//! - `TitleBar`: top line with the current section and catalog sizes
//!
//! The body of each screen is not a component: it is the text frame built
//! by `tui::view::render`, drawn as a single paragraph.

mod title_bar;
pub use title_bar::TitleBar;

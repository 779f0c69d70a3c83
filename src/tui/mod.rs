//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One inbox, one event at a time:
//!
//! - A key press maps to an `Action`, goes through `update()`, and the
//!   frame is redrawn before anything else is looked at.
//! - Catalog loads run on tokio tasks and send their `Action` over an mpsc
//!   channel. The loop takes at most one of those per turn, applies it,
//!   and redraws.
//! - Nothing else mutates `App`. Rendering only reads it.
//!
//! The loop idles in `poll` for up to 100ms, so loader results are picked
//! up promptly even when no keys arrive.

mod component;
mod components;
pub mod event;
mod ui;
pub mod view;

use log::{debug, info};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use ratatui::DefaultTerminal;

use crate::catalog::{CatalogSource, JsonFileSource, spawn_catalog_loads};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::obs::{ObsEvent, Observer};
use crate::tui::event::poll_event_timeout;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Apply one action and report any view change to the observer.
pub fn dispatch(app: &mut App, action: Action, observer: &dyn Observer) -> Effect {
    let previous_view = app.view;
    let effect = update(app, action);
    if app.view != previous_view {
        debug!("Entered view {}", app.view.label());
        observer.record(ObsEvent::ViewEntered(app.view));
    }
    effect
}

/// Start the catalog loads, take over the terminal, and run until quit.
///
/// The only errors returned are terminal I/O failures.
pub fn run(config: &ResolvedConfig, observer: Arc<dyn Observer>) -> std::io::Result<()> {
    let mut app = App::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let source: Arc<dyn CatalogSource> = Arc::new(JsonFileSource::new(config.data_dir.clone()));
    info!("Loading catalog from {}", config.data_dir.display());
    spawn_catalog_loads(source, observer.clone(), tx);

    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, &mut app, &rx, observer.as_ref());
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    rx: &mpsc::Receiver<Action>,
    observer: &dyn Observer,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app))?;
            needs_redraw = false;
        }

        if let Some(event) = poll_event_timeout(POLL_INTERVAL)? {
            // Resize just needs a redraw
            needs_redraw = true;
            if let Some(action) = event.action() {
                observer.record(ObsEvent::KeyPressed);
                if dispatch(app, action, observer) == Effect::Quit {
                    info!("Quit requested from {}", app.view.label());
                    return Ok(());
                }
            }
            continue;
        }

        // Handle background task actions (catalog loads)
        if let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {}", summarize(&action));
            dispatch(app, action, observer);
            needs_redraw = true;
        }
    }
}

/// Catalog payloads can be large; log their size rather than their contents.
fn summarize(action: &Action) -> String {
    match action {
        Action::ScalesLoaded(scales) => format!("ScalesLoaded({} scales)", scales.len()),
        Action::LessonsLoaded(lessons) => format!("LessonsLoaded({} lessons)", lessons.len()),
        other => format!("{:?}", other),
    }
}

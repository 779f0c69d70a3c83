//! # Catalog Loader
//!
//! Starts the two catalog reads as independent tokio tasks. Each task
//! delivers exactly one `Action` into the event loop's inbox: the loaded
//! records, or an empty list if the read failed. Failures are logged and
//! reported to the observer here and go no further.
//!
//! There is no cancellation or timeout. A result delivered after the user
//! has moved on still replaces the backing collection.

use std::sync::{Arc, mpsc};

use log::{error, info, warn};
use tokio::task::JoinHandle;

use super::source::{CatalogError, CatalogSource};
use crate::core::action::Action;
use crate::obs::{CatalogKind, ObsEvent, Observer};

/// Spawn the scales and lessons loads. Returns both task handles so callers
/// (tests, mostly) can wait for delivery.
pub fn spawn_catalog_loads(
    source: Arc<dyn CatalogSource>,
    observer: Arc<dyn Observer>,
    tx: mpsc::Sender<Action>,
) -> Vec<JoinHandle<()>> {
    info!("Spawning catalog loads from source '{}'", source.name());

    let scales_handle = {
        let source = source.clone();
        let observer = observer.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let scales = settle(CatalogKind::Scales, source.load_scales().await, &*observer);
            if tx.send(Action::ScalesLoaded(scales)).is_err() {
                warn!("Failed to deliver scales: receiver dropped");
            }
        })
    };

    let lessons_handle = tokio::spawn(async move {
        let lessons = settle(CatalogKind::Lessons, source.load_lessons().await, &*observer);
        if tx.send(Action::LessonsLoaded(lessons)).is_err() {
            warn!("Failed to deliver lessons: receiver dropped");
        }
    });

    vec![scales_handle, lessons_handle]
}

/// Logs and records the outcome of one load. A failure becomes an empty list.
fn settle<T>(
    catalog: CatalogKind,
    result: Result<Vec<T>, CatalogError>,
    observer: &dyn Observer,
) -> Vec<T> {
    match result {
        Ok(records) => {
            info!("Loaded {} successfully count={}", catalog.label(), records.len());
            observer.record(ObsEvent::LoadSucceeded {
                catalog,
                count: records.len(),
            });
            records
        }
        Err(e) => {
            error!("Failed to load {}: {}", catalog.label(), e);
            observer.record(ObsEvent::LoadFailed { catalog });
            Vec::new()
        }
    }
}

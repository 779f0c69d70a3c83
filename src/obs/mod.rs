//! # Observability
//!
//! Receives discrete named events from the event loop and the catalog
//! loader. Nothing in the app reads a return value from here, so swapping
//! in [`NoopObserver`] changes no behavior.
//!
//! Lifecycle: `Telemetry::new()` in `main` → shared as `Arc<dyn Observer>`
//! → `Telemetry::flush()` on shutdown.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;

use crate::core::state::View;

/// Which catalog record a load event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Scales,
    Lessons,
}

impl CatalogKind {
    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::Scales => "scales",
            CatalogKind::Lessons => "lessons",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObsEvent {
    AppStarted,
    AppExited,
    KeyPressed,
    ViewEntered(View),
    LoadSucceeded { catalog: CatalogKind, count: usize },
    LoadFailed { catalog: CatalogKind },
}

pub trait Observer: Send + Sync {
    fn record(&self, event: ObsEvent);
}

/// Discards every event.
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn record(&self, _event: ObsEvent) {}
}

/// Process-local counters.
#[derive(Default)]
pub struct Telemetry {
    app_starts: AtomicU64,
    app_exits: AtomicU64,
    key_presses: AtomicU64,
    view_entries: [AtomicU64; View::COUNT],
    load_successes: AtomicU64,
    load_failures: AtomicU64,
    /// Unix millis, 0 = never.
    last_app_start: AtomicI64,
    last_app_exit: AtomicI64,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TelemetrySnapshot {
    pub app_starts: u64,
    pub app_exits: u64,
    pub key_presses: u64,
    pub menu_views: u64,
    pub scales_list_views: u64,
    pub lessons_list_views: u64,
    pub scale_detail_views: u64,
    pub lesson_detail_views: u64,
    pub data_load_successes: u64,
    pub data_load_failures: u64,
    pub last_app_start: Option<DateTime<Utc>>,
    pub last_app_exit: Option<DateTime<Utc>>,
}

impl Telemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        let views = |view: View| self.view_entries[view.index()].load(Ordering::Relaxed);
        TelemetrySnapshot {
            app_starts: self.app_starts.load(Ordering::Relaxed),
            app_exits: self.app_exits.load(Ordering::Relaxed),
            key_presses: self.key_presses.load(Ordering::Relaxed),
            menu_views: views(View::Menu),
            scales_list_views: views(View::ScaleList),
            lessons_list_views: views(View::LessonList),
            scale_detail_views: views(View::ScaleDetail),
            lesson_detail_views: views(View::LessonDetail),
            data_load_successes: self.load_successes.load(Ordering::Relaxed),
            data_load_failures: self.load_failures.load(Ordering::Relaxed),
            last_app_start: from_millis(self.last_app_start.load(Ordering::Relaxed)),
            last_app_exit: from_millis(self.last_app_exit.load(Ordering::Relaxed)),
        }
    }

    /// Logs the final counters and flushes the logger. Call once on shutdown.
    pub fn flush(&self) {
        match serde_json::to_string(&self.snapshot()) {
            Ok(json) => info!("Telemetry summary: {}", json),
            Err(e) => warn!("Failed to serialize telemetry summary: {}", e),
        }
        log::Log::flush(log::logger());
    }
}

impl Observer for Telemetry {
    fn record(&self, event: ObsEvent) {
        debug!("Observed {:?}", event);
        match event {
            ObsEvent::AppStarted => {
                self.app_starts.fetch_add(1, Ordering::Relaxed);
                self.last_app_start
                    .store(Utc::now().timestamp_millis(), Ordering::Relaxed);
            }
            ObsEvent::AppExited => {
                self.app_exits.fetch_add(1, Ordering::Relaxed);
                self.last_app_exit
                    .store(Utc::now().timestamp_millis(), Ordering::Relaxed);
            }
            ObsEvent::KeyPressed => {
                self.key_presses.fetch_add(1, Ordering::Relaxed);
            }
            ObsEvent::ViewEntered(view) => {
                self.view_entries[view.index()].fetch_add(1, Ordering::Relaxed);
            }
            ObsEvent::LoadSucceeded { .. } => {
                self.load_successes.fetch_add(1, Ordering::Relaxed);
            }
            ObsEvent::LoadFailed { .. } => {
                self.load_failures.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
    if millis == 0 {
        None
    } else {
        DateTime::<Utc>::from_timestamp_millis(millis)
    }
}

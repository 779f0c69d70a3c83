//! # Core Application Logic
//!
//! This module contains the navigation model and the domain rendering.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (App, View)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Fretboard grid       │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  Catalog   │
//!           │  Adapter   │◀── Action ───│  Loader    │
//!           │ (ratatui)  │              │  (tokio)   │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the `View` enum
//! - [`action`]: The `Action` enum and `update()`
//! - [`fretboard`]: Scale positions → 6 × 13 text grid
//! - [`config`]: Layered configuration (the only part that touches the filesystem)

pub mod action;
pub mod config;
pub mod fretboard;
pub mod state;

//! couchtui - Living-room TUI for a streaming catalog
//!
//! A dark, remote-friendly terminal interface: browse a catalog grid, open
//! a details card, send the stream to a local player.
//!
//! # Modules
//!
//! - `models` - Catalog entries, load lifecycle, playback state
//! - `catalog` - Catalog sources and the activation-based loader
//! - `player` - Local player processes and status subscriptions
//! - `diag` - Injected diagnostics sink
//! - `ui` - TUI components
//! - `app` - Application state and navigation

pub mod app;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod diag;
pub mod models;
pub mod player;
pub mod ui;

// Re-export commonly used types
pub use models::{
    format_duration, messages, CatalogEntry, CatalogLoadState, PlaybackState, PlayerStatus,
    StatusEvent,
};

pub use app::{App, FocusTracker, GridState, HomeState, Screen};
pub use catalog::{
    BundledCatalog, CatalogError, CatalogLoader, CatalogSource, FixedCatalog, HttpCatalog,
    SelectedSource,
};
pub use diag::{DiagnosticsSink, LogSink, MemorySink};
pub use player::{LocalPlayer, PlayerKind, PlayerSession, StatusFeed};

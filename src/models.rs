//! Data structures and types for couchtui
//!
//! Contains all shared models used across the application organized by domain:
//! - **Catalog**: entries from the catalog source and the load lifecycle
//! - **Playback**: player status events and the player screen's UI state

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Fixed User-Facing Messages
// =============================================================================

/// Fixed friendly strings shown in place of raw failure detail.
///
/// Raw errors go to the diagnostics sink; the user only ever sees these.
pub mod messages {
    /// Shown when the catalog fetch fails, whatever the cause
    pub const CATALOG_FAILED: &str =
        "Catalog took a coffee break. Check your connection and try again.";

    /// Shown when playback fails with a 404 in the error detail
    pub const STREAM_MISSING: &str = "This stream took a detour (404). Try another title.";

    /// Shown for any other playback failure
    pub const PLAYBACK_FAILED: &str = "Playback hit a snag. Try another title.";
}

// =============================================================================
// Catalog Models
// =============================================================================

/// One streamable title with metadata
///
/// Constructed once by the catalog source and carried by value through
/// navigation; never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Thumbnail URI; empty means none (rendered as a placeholder, not an error)
    #[serde(default)]
    pub thumbnail: String,
    pub stream_url: String,
    /// Runtime in whole seconds
    pub duration: u64,
}

impl CatalogEntry {
    pub fn has_thumbnail(&self) -> bool {
        !self.thumbnail.is_empty()
    }

    /// Runtime formatted as M:SS (minutes uncapped)
    pub fn format_duration(&self) -> String {
        format_duration(self.duration)
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.format_duration())
    }
}

/// Catalog load lifecycle owned by the home screen
///
/// Exactly one state is active at a time. `Loaded` with an empty sequence
/// is valid and distinct from `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogLoadState {
    /// Fetch in flight
    #[default]
    Loading,
    /// Fetch settled with the source's entries, order preserved
    Loaded(Vec<CatalogEntry>),
    /// Fetch failed; carries the fixed friendly message
    Failed(String),
}

impl CatalogLoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogLoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CatalogLoadState::Failed(_))
    }

    /// Loaded entries, if settled successfully
    pub fn entries(&self) -> Option<&[CatalogEntry]> {
        match self {
            CatalogLoadState::Loaded(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            CatalogLoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Format whole seconds as M:SS, e.g. 596 -> "9:56", 3661 -> "61:01"
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

// =============================================================================
// Playback Models
// =============================================================================

/// Status vocabulary of the external player capability
///
/// `Loading` and `Error` are special-cased by the mapper; any other status
/// counts as playable and clears both buffering and error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Loading,
    ReadyToPlay,
    Ended,
    Error,
}

/// One status event from the player's subscription stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEvent {
    pub status: PlayerStatus,
    /// Raw failure detail; only meaningful with `PlayerStatus::Error`
    pub detail: Option<String>,
}

impl StatusEvent {
    pub fn loading() -> Self {
        Self {
            status: PlayerStatus::Loading,
            detail: None,
        }
    }

    pub fn ready() -> Self {
        Self {
            status: PlayerStatus::ReadyToPlay,
            detail: None,
        }
    }

    pub fn ended() -> Self {
        Self {
            status: PlayerStatus::Ended,
            detail: None,
        }
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self {
            status: PlayerStatus::Error,
            detail: Some(detail.into()),
        }
    }
}

/// Player screen UI state, updated only by applying status events
///
/// Reset implicitly whenever a new player session is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub buffering: bool,
    /// Fixed user-facing message when playback has failed
    pub error: Option<String>,
}

impl PlaybackState {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Apply one status event from the player subscription.
    ///
    /// Message selection on error: detail containing "404" gets the fixed
    /// missing-stream message, anything else the generic fallback. The raw
    /// detail never reaches the user.
    pub fn apply(&mut self, event: &StatusEvent) {
        match event.status {
            PlayerStatus::Loading => {
                self.buffering = true;
                self.error = None;
            }
            PlayerStatus::Error => {
                self.buffering = false;
                let detail = event.detail.as_deref().unwrap_or("");
                let msg = if detail.contains("404") {
                    messages::STREAM_MISSING
                } else {
                    messages::PLAYBACK_FAILED
                };
                self.error = Some(msg.to_string());
            }
            _ => {
                self.buffering = false;
                self.error = None;
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! Playback infrastructure
//!
//! - Local: spawn VLC/mpv for a stream URL and track its lifecycle
//! - Status: the owned subscription handle over the player's status stream

pub mod local;
pub mod status;

pub use local::{LocalPlayer, PlayerError, PlayerKind, PlayerSession};
pub use status::{StatusFeed, StatusSender};

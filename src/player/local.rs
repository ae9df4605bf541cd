//! Local player - VLC/mpv playback support
//!
//! Streams open in an external player window; couchtui tracks the process
//! and reports its lifecycle as status events on the session's feed.

use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;
use tokio::sync::mpsc;

use crate::models::StatusEvent;
use crate::player::status::StatusFeed;

/// Supported local players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerKind {
    /// VLC media player (default)
    #[default]
    Vlc,
    /// mpv media player
    Mpv,
}

impl PlayerKind {
    /// Get the command name for this player
    pub fn command(&self) -> &'static str {
        match self {
            PlayerKind::Vlc => {
                // On macOS, VLC is an app bundle - check for it
                #[cfg(target_os = "macos")]
                if std::path::Path::new("/Applications/VLC.app").exists() {
                    return "/Applications/VLC.app/Contents/MacOS/VLC";
                }
                "vlc"
            }
            PlayerKind::Mpv => "mpv",
        }
    }

    /// Get a display name for this player
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerKind::Vlc => "VLC",
            PlayerKind::Mpv => "mpv",
        }
    }

    /// Parse a config/CLI value ("vlc" or "mpv")
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "vlc" => Some(PlayerKind::Vlc),
            "mpv" => Some(PlayerKind::Mpv),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Errors from local player operations
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Player '{0}' not found. Install it first.")]
    NotFound(String),
    #[error("Failed to start player: {0}")]
    StartFailed(#[from] std::io::Error),
}

/// One playback attempt: the spawned player plus its status feed
///
/// Dropping the session releases the subscription (the watcher task is
/// aborted with it); the external player window, once open, is the user's.
pub struct PlayerSession {
    feed: StatusFeed,
}

impl PlayerSession {
    /// Session over an externally driven feed (tests, fakes)
    pub fn from_feed(feed: StatusFeed) -> Self {
        Self { feed }
    }

    pub fn feed_mut(&mut self) -> &mut StatusFeed {
        &mut self.feed
    }
}

/// Local player for streaming content
pub struct LocalPlayer {
    kind: PlayerKind,
}

impl LocalPlayer {
    pub fn new(kind: PlayerKind) -> Self {
        Self { kind }
    }

    pub fn vlc() -> Self {
        Self::new(PlayerKind::Vlc)
    }

    pub fn mpv() -> Self {
        Self::new(PlayerKind::Mpv)
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Check if the player is available on the system
    pub async fn is_available(&self) -> bool {
        let cmd = self.kind.command();

        // If it's a full path (macOS app bundle), check if it exists
        if cmd.starts_with('/') {
            return std::path::Path::new(cmd).exists();
        }

        Command::new("which")
            .arg(cmd)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Construct a player for the stream URI and begin playback.
    ///
    /// Status events on the returned session's feed: `Loading` while the
    /// process is spawning, `ReadyToPlay` once it is up, `Error` with the
    /// raw detail if the spawn fails or the player exits abnormally, and
    /// `Ended` on a clean exit.
    pub fn play(&self, stream_url: &str) -> PlayerSession {
        let (tx, rx) = mpsc::unbounded_channel();
        let _ = tx.send(StatusEvent::loading());

        let mut cmd = Command::new(self.kind.command());
        match self.kind {
            PlayerKind::Vlc => {
                cmd.arg(stream_url);
                cmd.arg("--no-video-title-show"); // Don't show filename overlay
            }
            PlayerKind::Mpv => {
                cmd.arg(stream_url);
                cmd.arg("--force-window=immediate"); // Show window immediately
            }
        }

        // Don't capture output - the player owns its own window
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());

        let command_name = self.kind.command();
        let watcher = tokio::spawn(async move {
            let mut child = match cmd.spawn() {
                Ok(child) => child,
                Err(e) => {
                    let detail = if e.kind() == std::io::ErrorKind::NotFound {
                        PlayerError::NotFound(command_name.to_string()).to_string()
                    } else {
                        PlayerError::StartFailed(e).to_string()
                    };
                    let _ = tx.send(StatusEvent::error(detail));
                    return;
                }
            };

            let _ = tx.send(StatusEvent::ready());

            match child.wait().await {
                Ok(status) if status.success() => {
                    let _ = tx.send(StatusEvent::ended());
                }
                Ok(status) => {
                    let _ = tx.send(StatusEvent::error(format!("player exited with {}", status)));
                }
                Err(e) => {
                    let _ = tx.send(StatusEvent::error(e.to_string()));
                }
            }
        });

        PlayerSession {
            feed: StatusFeed::new(rx, Some(watcher)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerStatus;

    #[test]
    fn test_player_kind_command() {
        // On macOS with VLC installed, returns full path; otherwise "vlc"
        let vlc_cmd = PlayerKind::Vlc.command();
        assert!(vlc_cmd == "vlc" || vlc_cmd == "/Applications/VLC.app/Contents/MacOS/VLC");
        assert_eq!(PlayerKind::Mpv.command(), "mpv");
    }

    #[test]
    fn test_player_kind_display() {
        assert_eq!(PlayerKind::Vlc.to_string(), "VLC");
        assert_eq!(PlayerKind::Mpv.to_string(), "mpv");
    }

    #[test]
    fn test_player_kind_from_name() {
        assert_eq!(PlayerKind::from_name("mpv"), Some(PlayerKind::Mpv));
        assert_eq!(PlayerKind::from_name("VLC"), Some(PlayerKind::Vlc));
        assert_eq!(PlayerKind::from_name("wmp"), None);
    }

    #[test]
    fn test_default_player() {
        assert_eq!(PlayerKind::default(), PlayerKind::Vlc);
    }

    #[tokio::test]
    async fn test_session_from_feed_delivers_events() {
        let (tx, feed) = StatusFeed::channel();
        let mut session = PlayerSession::from_feed(feed);

        tx.send(StatusEvent::loading()).unwrap();
        tx.send(StatusEvent::ready()).unwrap();

        assert_eq!(
            session.feed_mut().try_next().unwrap().status,
            PlayerStatus::Loading
        );
        assert_eq!(
            session.feed_mut().try_next().unwrap().status,
            PlayerStatus::ReadyToPlay
        );
    }
}

//! CLI Command Handlers
//!
//! Implements the scriptable commands over the same catalog and player
//! plumbing the TUI uses. Each handler takes CLI args and Output, returns
//! ExitCode.

use crate::catalog::{CatalogSource, SelectedSource};
use crate::cli::{ExitCode, InfoCmd, ListCmd, Output, PlayCmd};
use crate::diag::{DiagnosticsSink, LogSink};
use crate::models::{messages, CatalogEntry, PlaybackState, PlayerStatus};
use crate::player::{LocalPlayer, PlayerKind};

// =============================================================================
// List Command
// =============================================================================

pub async fn list_cmd(cmd: ListCmd, source: &SelectedSource, output: &Output) -> ExitCode {
    output.info("Fetching catalog...");

    match source.fetch().await {
        Ok(mut entries) => {
            if let Some(limit) = cmd.limit {
                entries.truncate(limit);
            }

            if output.json {
                if let Err(e) = output.print(&entries) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                for entry in &entries {
                    println!(
                        "{:<20} {:>7}  {}",
                        entry.id,
                        entry.format_duration(),
                        entry.title
                    );
                }
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Catalog fetch failed: {}", e), ExitCode::NetworkError),
    }
}

// =============================================================================
// Info Command
// =============================================================================

pub async fn info_cmd(cmd: InfoCmd, source: &SelectedSource, output: &Output) -> ExitCode {
    match find_entry(&cmd.id, source, output).await {
        Ok(entry) => {
            if output.json {
                if let Err(e) = output.print(&entry) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                println!("{}", entry.title);
                println!("  id:        {}", entry.id);
                println!("  duration:  {}", entry.format_duration());
                println!("  stream:    {}", entry.stream_url);
                if entry.has_thumbnail() {
                    println!("  thumbnail: {}", entry.thumbnail);
                }
                println!();
                println!("  {}", entry.description);
            }
            ExitCode::Success
        }
        Err(code) => code,
    }
}

// =============================================================================
// Play Command
// =============================================================================

pub async fn play_cmd(
    cmd: PlayCmd,
    source: &SelectedSource,
    player_kind: PlayerKind,
    output: &Output,
) -> ExitCode {
    let entry = match find_entry(&cmd.id, source, output).await {
        Ok(entry) => entry,
        Err(code) => return code,
    };

    let player = LocalPlayer::new(player_kind);
    let mut session = player.play(&entry.stream_url);

    while let Some(event) = session.feed_mut().next().await {
        match event.status {
            PlayerStatus::Loading => output.info("⟳ Buffering..."),
            PlayerStatus::ReadyToPlay => {
                output.info(format!("▶ Playing {} in {}", entry.title, player.kind()));
                if !cmd.wait {
                    return ExitCode::Success;
                }
            }
            PlayerStatus::Ended => return ExitCode::Success,
            PlayerStatus::Error => {
                // Raw detail to diagnostics, fixed message to the user
                let detail = event.detail.clone().unwrap_or_default();
                LogSink.record_error("playback", &detail);

                let mut playback = PlaybackState::default();
                playback.apply(&event);
                let msg = playback
                    .error
                    .unwrap_or_else(|| messages::PLAYBACK_FAILED.to_string());
                return output.error(msg, ExitCode::PlaybackFailed);
            }
        }
    }

    ExitCode::Success
}

// =============================================================================
// Helpers
// =============================================================================

/// Fetch the catalog and look up one entry by id
async fn find_entry(
    id: &str,
    source: &SelectedSource,
    output: &Output,
) -> Result<CatalogEntry, ExitCode> {
    let entries = match source.fetch().await {
        Ok(entries) => entries,
        Err(e) => {
            return Err(output.error(
                format!("Catalog fetch failed: {}", e),
                ExitCode::NetworkError,
            ))
        }
    };

    entries
        .into_iter()
        .find(|entry| entry.id == id)
        .ok_or_else(|| output.error(format!("No catalog entry '{}'", id), ExitCode::NotFound))
}

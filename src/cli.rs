//! CLI - Command Line Interface for couchtui
//!
//! Every screen of the TUI has a scriptable counterpart. All output is
//! JSON-parseable with `--json`.
//!
//! # Examples
//!
//! ```bash
//! # List the catalog
//! couchtui list --json
//!
//! # Inspect one entry
//! couchtui info bbb-hls
//!
//! # Play an entry in mpv and wait for the window to close
//! couchtui play bbb-hls --player mpv --wait
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::player::PlayerKind;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Catalog fetch failed
    NetworkError = 3,
    /// No such catalog entry
    NotFound = 4,
    /// Player failed to start or exited abnormally
    PlaybackFailed = 5,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// couchtui - living-room TUI for a streaming catalog
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "couchtui",
    version,
    about = "Living-room TUI for browsing and playing a streaming catalog",
    long_about = "A dark, remote-friendly terminal interface for browsing a \
                  streaming catalog and sending titles to a local player.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  couchtui                      Launch interactive TUI\n\
                  couchtui list --json          Dump the catalog\n\
                  couchtui info bbb-hls         Show one entry\n\
                  couchtui play bbb-hls -w      Play and wait"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Fetch the catalog from an HTTP endpoint instead of the bundled asset
    #[arg(long, global = true)]
    pub catalog_url: Option<String>,

    /// Player to launch streams with
    #[arg(long, short = 'p', global = true, value_enum)]
    pub player: Option<PlayerChoice>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog entries
    #[command(visible_alias = "ls")]
    List(ListCmd),

    /// Show details for one catalog entry
    #[command(visible_alias = "i")]
    Info(InfoCmd),

    /// Play a catalog entry in the local player
    Play(PlayCmd),
}

/// List catalog entries
#[derive(Args, Debug)]
pub struct ListCmd {
    /// Maximum number of entries
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,
}

/// Show details for one catalog entry
#[derive(Args, Debug)]
pub struct InfoCmd {
    /// Catalog entry identifier
    #[arg(required = true)]
    pub id: String,
}

/// Play a catalog entry
#[derive(Args, Debug)]
pub struct PlayCmd {
    /// Catalog entry identifier
    #[arg(required = true)]
    pub id: String,

    /// Wait for the player to exit before returning
    #[arg(long, short = 'w')]
    pub wait: bool,
}

/// Local player selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerChoice {
    Vlc,
    Mpv,
}

impl From<PlayerChoice> for PlayerKind {
    fn from(choice: PlayerChoice) -> Self {
        match choice {
            PlayerChoice::Vlc => PlayerKind::Vlc,
            PlayerChoice::Mpv => PlayerKind::Mpv,
        }
    }
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Handling
// =============================================================================

/// Output configuration derived from CLI flags
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data as JSON
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        let output = JsonOutput::success(data);
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet and JSON modes)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Entry ID Validation
// =============================================================================

/// Validate a catalog entry id (non-empty, no whitespace)
pub fn validate_entry_id(id: &str) -> Result<&str, &'static str> {
    if !id.is_empty() && !id.chars().any(char::is_whitespace) {
        Ok(id)
    } else {
        Err("Invalid entry id (expected a non-empty identifier like bbb-hls)")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_tui_mode() {
        let cli = Cli::parse_from(["couchtui"]);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_list_parses() {
        let cli = Cli::parse_from(["couchtui", "list", "--limit", "3", "--json"]);
        assert!(cli.is_cli_mode());
        assert!(cli.json);
        match cli.command {
            Some(Command::List(cmd)) => assert_eq!(cmd.limit, Some(3)),
            other => panic!("expected list command, got {:?}", other),
        }
    }

    #[test]
    fn test_play_parses_with_player_choice() {
        let cli = Cli::parse_from(["couchtui", "play", "bbb-hls", "-w", "--player", "mpv"]);
        assert_eq!(cli.player, Some(PlayerChoice::Mpv));
        match cli.command {
            Some(Command::Play(cmd)) => {
                assert_eq!(cmd.id, "bbb-hls");
                assert!(cmd.wait);
            }
            other => panic!("expected play command, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_entry_id() {
        assert!(validate_entry_id("bbb-hls").is_ok());
        assert!(validate_entry_id("sintel_1").is_ok());
        assert!(validate_entry_id("").is_err());
        assert!(validate_entry_id("two words").is_err());
    }
}

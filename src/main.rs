//! couchtui - Living-room TUI for a streaming catalog
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! couchtui
//!
//! # CLI mode (for automation)
//! couchtui list --json
//! couchtui info bbb-hls
//! couchtui play bbb-hls --player mpv --wait
//! ```

use std::io::{stdout, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use couchtui::app::{App, Screen};
use couchtui::catalog::{CatalogLoader, SelectedSource};
use couchtui::cli::{validate_entry_id, Cli, Command, ExitCode, Output};
use couchtui::commands;
use couchtui::config::Config;
use couchtui::diag::LogSink;
use couchtui::player::{LocalPlayer, PlayerSession};
use couchtui::ui::{self, Theme};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        run_tui(cli).await
    }
}

/// Route diagnostics to stderr, gated on RUST_LOG
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);
    let config = Config::load();
    let source = SelectedSource::from_url(cli.catalog_url.clone().or(config.catalog_url.clone()));
    let player_kind = cli
        .player
        .map(Into::into)
        .unwrap_or_else(|| config.player_kind());

    match cli.command {
        Some(Command::List(cmd)) => commands::list_cmd(cmd, &source, &output).await,

        Some(Command::Info(cmd)) => {
            if let Err(e) = validate_entry_id(&cmd.id) {
                return output.error(e, ExitCode::InvalidArgs);
            }
            commands::info_cmd(cmd, &source, &output).await
        }

        Some(Command::Play(cmd)) => {
            if let Err(e) = validate_entry_id(&cmd.id) {
                return output.error(e, ExitCode::InvalidArgs);
            }
            commands::play_cmd(cmd, &source, player_kind, &output).await
        }

        None => {
            // This shouldn't happen (handled by is_cli_mode check)
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(cli: Cli) -> Result<()> {
    let config = Config::load();
    let source = SelectedSource::from_url(cli.catalog_url.clone().or(config.catalog_url.clone()));
    let player = LocalPlayer::new(
        cli.player
            .map(Into::into)
            .unwrap_or_else(|| config.player_kind()),
    );

    let mut terminal = init_terminal()?;
    let mut app = App::new(config.columns());

    let mut loader = CatalogLoader::new(Arc::new(LogSink));
    loader.activate(source.clone());

    let result = run_event_loop(&mut terminal, &mut app, &mut loader, &source, &player).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, applies async outcomes, renders UI
async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    loader: &mut CatalogLoader,
    source: &SelectedSource,
    player: &LocalPlayer,
) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    // Player session scoped to the player screen: acquired on entry,
    // released on every path that leaves it
    let mut session: Option<PlayerSession> = None;

    while app.running {
        terminal.draw(|frame| render_ui(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Settled catalog outcomes; stale generations were already discarded
        if let Some(state) = loader.poll() {
            app.apply_catalog(state);
        }

        // Restart the whole load state machine on request
        if app.take_reload_request() {
            loader.activate(source.clone());
        }

        match &app.screen {
            Screen::Player(entry) if session.is_none() => {
                session = Some(player.play(&entry.stream_url));
            }
            Screen::Player(_) => {
                if let Some(active) = session.as_mut() {
                    while let Some(event) = active.feed_mut().try_next() {
                        app.apply_status(&event);
                    }
                }
            }
            _ => {
                // Dropping the session releases the status subscription
                session = None;
            }
        }
    }

    Ok(())
}

// =============================================================================
// UI Rendering
// =============================================================================

/// Main render function - dispatches to view-specific renderers
fn render_ui(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::BACKGROUND)),
        area,
    );

    // Main layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    match app.screen.clone() {
        Screen::Home => ui::home::render(frame, chunks[1], app),
        Screen::Details(entry) => ui::details::render(frame, chunks[1], app, &entry),
        Screen::Player(entry) => ui::player::render(frame, chunks[1], app, &entry),
    }

    render_status_bar(frame, chunks[2], app);
}

/// Render the header with logo and breadcrumb
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Logo
            Constraint::Min(1),     // Breadcrumb
        ])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled(
            "COUCH",
            Style::default()
                .fg(Theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "TUI",
            Style::default()
                .fg(Theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, header_chunks[0]);

    let crumb = match &app.screen {
        Screen::Home => "Home".to_string(),
        Screen::Details(entry) => format!("Home ▸ {}", entry.title),
        Screen::Player(entry) => format!("Home ▸ {} ▸ Playing", entry.title),
    };

    let breadcrumb = Paragraph::new(Span::styled(crumb, Theme::dimmed()))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border()),
        );
    frame.render_widget(breadcrumb, header_chunks[1]);
}

/// Render status bar at bottom
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = match app.screen {
        Screen::Home => &[
            ("↑↓←→", "move"),
            ("↵", "select"),
            ("r", "reload"),
            ("q", "quit"),
        ],
        Screen::Details(_) => &[("↵", "play"), ("ESC", "back"), ("q", "quit")],
        Screen::Player(_) => &[("s", "stop"), ("ESC", "back"), ("q", "quit")],
    };

    let mut spans = Vec::new();
    for (key, desc) in hints {
        spans.push(Span::styled(format!(" {} ", key), Theme::keybind()));
        spans.push(Span::styled(format!("{}  ", desc), Theme::keybind_desc()));
    }

    let status = Paragraph::new(Line::from(spans)).style(Theme::status_bar());
    frame.render_widget(status, area);
}

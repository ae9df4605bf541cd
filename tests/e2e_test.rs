//! End-to-end flow tests for couchtui
//!
//! Walks the complete user journey over the bundled 6-entry catalog:
//! Home grid -> Details -> Player, plus the failure and recovery paths.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use couchtui::app::{App, Screen};
use couchtui::catalog::{BundledCatalog, CatalogLoader, CatalogSource, FixedCatalog};
use couchtui::diag::MemorySink;
use couchtui::models::{messages, CatalogEntry, CatalogLoadState, StatusEvent};
use couchtui::player::{PlayerSession, StatusFeed};

// =============================================================================
// Helpers
// =============================================================================

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

/// App with the bundled catalog loaded through the real loader
async fn app_with_bundled_catalog() -> App {
    let mut app = App::new(3);
    let mut loader = CatalogLoader::new(Arc::new(MemorySink::new()));
    loader.activate(BundledCatalog);
    app.apply_catalog(loader.settled().await);
    app
}

/// Move the grid selection to the entry with `id`, arrow key by arrow key
fn select_by_id(app: &mut App, id: &str) {
    let target = app
        .home
        .entries()
        .iter()
        .position(|e| e.id == id)
        .expect("entry in catalog");
    app.handle_key(key(KeyCode::Home));
    for _ in 0..target {
        app.handle_key(key(KeyCode::Right));
    }
    assert_eq!(app.home.grid.selected, target);
}

// =============================================================================
// Home -> Details -> Player
// =============================================================================

#[tokio::test]
async fn test_select_bbb_hls_and_play() {
    let mut app = app_with_bundled_catalog().await;
    assert_eq!(app.home.entries().len(), 6);

    select_by_id(&mut app, "bbb-hls");
    assert!(app.home.focus.is_focused("bbb-hls", app.home.entries()));

    // Enter opens the details card for the focused entry
    app.handle_key(key(KeyCode::Enter));
    let Screen::Details(details_entry) = app.screen.clone() else {
        panic!("expected details screen");
    };
    assert_eq!(details_entry.id, "bbb-hls");
    assert_eq!(details_entry.duration, 596);
    assert_eq!(details_entry.format_duration(), "9:56");

    // Enter presses play; the identical entry reaches the player
    app.handle_key(key(KeyCode::Enter));
    let Screen::Player(player_entry) = app.screen.clone() else {
        panic!("expected player screen");
    };
    assert_eq!(player_entry, details_entry);
    assert_eq!(
        player_entry.stream_url,
        "https://test-streams.mux.dev/x36xhzz/x36xhzz.m3u8"
    );
}

#[tokio::test]
async fn test_payload_identity_for_every_entry() {
    let template = app_with_bundled_catalog().await;
    let ids: Vec<String> = template
        .home
        .entries()
        .iter()
        .map(|e| e.id.clone())
        .collect();

    for id in ids {
        let mut app = app_with_bundled_catalog().await;
        select_by_id(&mut app, &id);
        let chosen = app.home.selected_entry().unwrap().clone();

        app.handle_key(key(KeyCode::Enter));
        let details = app.screen.entry().unwrap().clone();
        app.handle_key(key(KeyCode::Enter));
        let played = app.screen.entry().unwrap().clone();

        // Identifier and every field survive the whole flow unchanged
        assert_eq!(details, chosen);
        assert_eq!(played, chosen);
    }
}

#[tokio::test]
async fn test_back_walks_the_stack_home() {
    let mut app = app_with_bundled_catalog().await;
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));
    assert!(matches!(app.screen, Screen::Player(_)));

    app.handle_key(key(KeyCode::Esc));
    assert!(matches!(app.screen, Screen::Details(_)));
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.screen, Screen::Home);
}

// =============================================================================
// Player Status Flow
// =============================================================================

#[tokio::test]
async fn test_status_events_drive_player_state() {
    let mut app = app_with_bundled_catalog().await;
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));
    assert!(app.is_playing());

    let (tx, feed) = StatusFeed::channel();
    let mut session = PlayerSession::from_feed(feed);

    let drain = |app: &mut App, session: &mut PlayerSession| {
        while let Some(event) = session.feed_mut().try_next() {
            app.apply_status(&event);
        }
    };

    tx.send(StatusEvent::loading()).unwrap();
    drain(&mut app, &mut session);
    assert!(app.playback.buffering);
    assert!(!app.playback.has_error());

    tx.send(StatusEvent::ready()).unwrap();
    drain(&mut app, &mut session);
    assert!(!app.playback.buffering);

    tx.send(StatusEvent::error("404 stream not found")).unwrap();
    drain(&mut app, &mut session);
    assert_eq!(app.playback.error.as_deref(), Some(messages::STREAM_MISSING));

    // A later generic failure gets the generic fallback
    tx.send(StatusEvent::error("500 internal")).unwrap();
    drain(&mut app, &mut session);
    assert_eq!(
        app.playback.error.as_deref(),
        Some(messages::PLAYBACK_FAILED)
    );
}

#[tokio::test]
async fn test_leaving_player_releases_subscription() {
    let mut app = app_with_bundled_catalog().await;
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));

    let (tx, feed) = StatusFeed::channel();
    let mut session = Some(PlayerSession::from_feed(feed));

    // Back to details; the loop's scoped-session rule drops the handle
    app.handle_key(key(KeyCode::Esc));
    if !app.is_playing() {
        session = None;
    }
    assert!(session.is_none());

    // No event can reach the disposed screen anymore
    assert!(tx.send(StatusEvent::ready()).is_err());
}

#[tokio::test]
async fn test_replay_after_error_starts_clean() {
    let mut app = app_with_bundled_catalog().await;
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));
    app.apply_status(&StatusEvent::error("404"));
    assert!(app.playback.has_error());

    // Back out and play again: the player state resets on remount
    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Enter));
    assert!(app.is_playing());
    assert!(!app.playback.has_error());
    assert!(!app.playback.buffering);
}

// =============================================================================
// Failure and Recovery
// =============================================================================

#[tokio::test]
async fn test_catalog_failure_reaches_home_with_fixed_message() {
    let mut app = App::new(3);
    app.apply_catalog(CatalogLoadState::Failed(messages::CATALOG_FAILED.into()));

    assert!(app.home.load.is_failed());
    assert_eq!(app.home.load.message(), Some(messages::CATALOG_FAILED));
    assert!(app.home.entries().is_empty());

    // Selection is a no-op while failed
    assert!(!app.select_entry());
    assert_eq!(app.screen, Screen::Home);
}

#[tokio::test]
async fn test_reload_recovers_from_failure() {
    let mut app = App::new(3);
    let mut loader = CatalogLoader::new(Arc::new(MemorySink::new()));
    app.apply_catalog(CatalogLoadState::Failed(messages::CATALOG_FAILED.into()));

    // 'r' restarts the machine; the loop re-activates the loader
    app.handle_key(key(KeyCode::Char('r')));
    assert!(app.home.load.is_loading());
    assert!(app.take_reload_request());

    loader.activate(BundledCatalog);
    app.apply_catalog(loader.settled().await);
    assert_eq!(app.home.entries().len(), 6);
}

#[tokio::test]
async fn test_empty_catalog_renders_empty_not_failed() {
    let mut app = App::new(3);
    let mut loader = CatalogLoader::new(Arc::new(MemorySink::new()));
    loader.activate(FixedCatalog::new(Vec::new()));
    app.apply_catalog(loader.settled().await);

    assert!(!app.home.load.is_failed());
    assert!(app.home.entries().is_empty());
}

// =============================================================================
// Bundled Fixture Sanity
// =============================================================================

#[tokio::test]
async fn test_bundled_fixture_shape() {
    let entries: Vec<CatalogEntry> = BundledCatalog.fetch().await.unwrap();
    assert_eq!(entries.len(), 6);

    // Ids are unique
    let mut ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 6);

    // Every entry has a playable stream URL
    assert!(entries.iter().all(|e| e.stream_url.starts_with("https://")));
}

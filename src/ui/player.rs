//! Player screen: the video surface with buffering and error states
//!
//! The stream itself plays in the external player window; this screen shows
//! what the session is doing and surfaces the fixed friendly message when
//! playback fails.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::CatalogEntry;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App, entry: &CatalogEntry) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Video surface
        ])
        .split(area);

    render_header(frame, chunks[0], entry);

    if app.playback.has_error() {
        render_error(frame, chunks[1], app);
    } else {
        render_surface(frame, chunks[1], app, entry);
    }
}

fn render_header(frame: &mut Frame, area: Rect, entry: &CatalogEntry) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(&entry.title, Theme::focused_text())),
        Line::from(Span::styled(&entry.description, Theme::soft())),
    ]);
    frame.render_widget(header, area);
}

fn render_surface(frame: &mut Frame, area: Rect, app: &App, entry: &CatalogEntry) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .title(Span::styled(" ▶ NOW PLAYING ", Theme::success()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Streaming in the external player window",
            Theme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled(entry.stream_url.clone(), Theme::dimmed())),
        Line::from(""),
        Line::from(vec![
            Span::styled(" s ", Theme::keybind()),
            Span::styled("Stop  ", Theme::keybind_desc()),
            Span::styled(" ESC ", Theme::keybind()),
            Span::styled("Back", Theme::keybind_desc()),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(content, inner);

    if app.playback.buffering {
        render_buffering_overlay(frame, inner);
    }
}

fn render_buffering_overlay(frame: &mut Frame, area: Rect) {
    let overlay_width = 24.min(area.width);
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(overlay_width)) / 2,
        y: area.y + area.height / 2,
        width: overlay_width,
        height: 1.min(area.height),
    };

    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Paragraph::new("⟳ Buffering...")
            .style(Theme::loading())
            .alignment(Alignment::Center),
        overlay,
    );
}

fn render_error(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Theme::error())
        .title(Span::styled(" ✗ PLAYBACK ", Theme::error()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let message = app.playback.error.as_deref().unwrap_or_default();
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Theme::error())),
        Line::from(""),
        Line::from(Span::styled("Press ESC to go back", Theme::dimmed())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(content, inner);
}

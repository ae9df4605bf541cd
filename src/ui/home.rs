//! Home screen: the catalog grid
//!
//! Renders one of four states: loading, failed (fixed friendly message),
//! empty, or the grid of catalog cards with the focused card highlighted.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::Theme;

/// Height of one catalog card in rows (border + art + title)
const CARD_HEIGHT: u16 = 7;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(" LIBRARY ", Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.home.load.is_loading() {
        let loading = Paragraph::new("⟳ Loading catalog...")
            .style(Theme::loading())
            .alignment(Alignment::Center);
        frame.render_widget(loading, centered_line(inner));
        return;
    }

    if let Some(message) = app.home.load.message() {
        let error = Paragraph::new(message.to_string())
            .style(Theme::error())
            .alignment(Alignment::Center);
        frame.render_widget(error, centered_line(inner));
        return;
    }

    if app.home.entries().is_empty() {
        let empty = Paragraph::new("No videos available")
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(empty, centered_line(inner));
        return;
    }

    render_grid(frame, inner, app);
}

fn render_grid(frame: &mut Frame, area: Rect, app: &mut App) {
    let columns = app.home.grid.columns as u16;
    let card_width = (area.width / columns.max(1)).max(10);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;

    app.home.grid.scroll_into_view(visible_rows);

    let entries = app.home.entries().to_vec();
    let focus = app.home.focus.clone();
    let first_visible = app.home.grid.offset * app.home.grid.columns;

    for (i, entry) in entries.iter().enumerate().skip(first_visible) {
        let row = i / app.home.grid.columns;
        let col = i % app.home.grid.columns;
        if row < app.home.grid.offset || row >= app.home.grid.offset + visible_rows {
            continue;
        }

        let cell = Rect {
            x: area.x + col as u16 * card_width,
            y: area.y + (row - app.home.grid.offset) as u16 * CARD_HEIGHT,
            width: card_width.min(area.width.saturating_sub(col as u16 * card_width)),
            height: CARD_HEIGHT.min(area.height.saturating_sub(
                (row - app.home.grid.offset) as u16 * CARD_HEIGHT,
            )),
        };
        if cell.width == 0 || cell.height == 0 {
            continue;
        }

        let is_focused = focus.is_focused(&entry.id, &entries);
        render_card(frame, cell, entry, is_focused);
    }
}

fn render_card(frame: &mut Frame, area: Rect, entry: &crate::models::CatalogEntry, focused: bool) {
    let border = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(Theme::card());

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // Art area above, title line at the bottom
    let art_height = inner.height.saturating_sub(1);
    let art = Rect {
        height: art_height,
        ..inner
    };
    let title_line = Rect {
        y: inner.y + art_height,
        height: 1,
        ..inner
    };

    if art.height > 0 {
        // No bitmaps in a terminal; thumbnails get a tinted panel, missing
        // ones the designed placeholder
        let panel = if entry.has_thumbnail() {
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("▶", Theme::soft())),
                Line::from(Span::styled(entry.format_duration(), Theme::duration())),
            ])
            .style(Theme::placeholder())
            .alignment(Alignment::Center)
        } else {
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("no art", Theme::dimmed())),
                Line::from(Span::styled(entry.format_duration(), Theme::duration())),
            ])
            .style(Theme::placeholder())
            .alignment(Alignment::Center)
        };
        frame.render_widget(panel, art);
    }

    let title_style = if focused {
        Theme::focused_text()
    } else {
        Theme::text()
    };
    let marker = if focused { "▸ " } else { "  " };
    let title = Paragraph::new(Line::from(vec![
        Span::styled(marker, title_style),
        Span::styled(&entry.title, title_style),
    ]));
    frame.render_widget(title, title_line);
}

/// A one-line rect vertically centered in `area`
fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: 1.min(area.height),
        ..area
    }
}

//! Details screen: poster, metadata, and the play button

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::CatalogEntry;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App, entry: &CatalogEntry) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(format!(" {} ", entry.title), Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(34), // Poster
            Constraint::Min(1),     // Info
        ])
        .split(inner);

    render_poster(frame, chunks[0], entry);
    render_info(frame, chunks[1], app, entry);
}

fn render_poster(frame: &mut Frame, area: Rect, entry: &CatalogEntry) {
    let poster = if entry.has_thumbnail() {
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("🎬", Theme::soft())),
            Line::from(""),
            Line::from(Span::styled(entry.thumbnail.clone(), Theme::dimmed())),
        ])
        .wrap(Wrap { trim: true })
        .style(Theme::placeholder())
        .alignment(Alignment::Center)
    } else {
        // Designed fallback, not an error state
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("no poster", Theme::dimmed())),
        ])
        .style(Theme::placeholder())
        .alignment(Alignment::Center)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(poster, inner);
}

fn render_info(frame: &mut Frame, area: Rect, app: &App, entry: &CatalogEntry) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Duration
            Constraint::Length(1),
            Constraint::Min(2),    // Description
            Constraint::Length(3), // Play button
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(&entry.title, Theme::focused_text())),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(entry.format_duration(), Theme::duration())),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(&entry.description, Theme::soft())).wrap(Wrap { trim: true }),
        chunks[3],
    );

    render_play_button(frame, chunks[4], app.play_focused);
}

fn render_play_button(frame: &mut Frame, area: Rect, focused: bool) {
    let (style, border) = if focused {
        (Theme::play_button_focused(), Theme::border_focused())
    } else {
        (Theme::play_button(), Theme::border())
    };

    let button_area = Rect {
        width: area.width.min(14),
        ..area
    };

    let button = Paragraph::new(Span::styled("▶ Play", style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    frame.render_widget(button, button_area);
}

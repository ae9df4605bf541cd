//! Living-room theme for couchtui
//!
//! Dark ten-foot palette with a single bright focus color, tuned for
//! readability from across a room.

use ratatui::style::{Color, Modifier, Style};

/// Dark living-room color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #0f1115 (near-black blue)
    pub const BACKGROUND: Color = Color::Rgb(0x0f, 0x11, 0x15);

    /// Card surface: #1a1d23
    pub const CARD: Color = Color::Rgb(0x1a, 0x1d, 0x23);

    /// Thumbnail/poster placeholder: #2a2f38
    pub const PLACEHOLDER: Color = Color::Rgb(0x2a, 0x2f, 0x38);

    /// Primary/focus: #61dafb (sky cyan)
    pub const PRIMARY: Color = Color::Rgb(0x61, 0xda, 0xfb);

    /// Text: #f5f7fb (soft white)
    pub const TEXT: Color = Color::Rgb(0xf5, 0xf7, 0xfb);

    /// Body text: #d1d5db
    pub const TEXT_SOFT: Color = Color::Rgb(0xd1, 0xd5, 0xdb);

    /// Muted metadata: #9ca3af
    pub const DIM: Color = Color::Rgb(0x9c, 0xa3, 0xaf);

    /// Success: #4ade80
    pub const SUCCESS: Color = Color::Rgb(0x4a, 0xde, 0x80);

    /// Warning: #fbbf24
    pub const WARNING: Color = Color::Rgb(0xfb, 0xbf, 0x24);

    /// Error: #f87171
    pub const ERROR: Color = Color::Rgb(0xf8, 0x71, 0x71);

    // ═══════════════════════════════════════════════════════════════════════
    // DERIVED COLORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Border color (muted slate)
    pub const BORDER: Color = Color::Rgb(0x3a, 0x40, 0x4c);

    /// Border color when focused (full primary)
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Body/description text
    pub fn soft() -> Style {
        Style::default().fg(Self::TEXT_SOFT)
    }

    /// Dimmed/muted text
    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Screen/card title when focused
    pub fn focused_text() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Success style
    pub fn success() -> Style {
        Style::default()
            .fg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// Loading/spinner indicator
    pub fn loading() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Normal/unfocused border
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Focused border
    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    /// Card surface
    pub fn card() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::CARD)
    }

    /// Thumbnail/poster placeholder surface
    pub fn placeholder() -> Style {
        Style::default().fg(Self::DIM).bg(Self::PLACEHOLDER)
    }

    /// Play button (unfocused)
    pub fn play_button() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Play button (focused): inverted, large tap target
    pub fn play_button_focused() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Duration/runtime metadata
    pub fn duration() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Keybinding hint style
    pub fn keybind() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Keybinding description style
    pub fn keybind_desc() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::CARD)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Calculate relative luminance for a color (used in contrast ratio)
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// Calculate contrast ratio between two colors
/// Returns a value between 1 (same color) and 21 (black/white)
/// WCAG AA requires >= 4.5:1 for normal text, >= 3:1 for large text
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Check if a foreground/background pair meets WCAG AA for normal text
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// Check if a foreground/background pair meets WCAG AA for large text
pub fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 3.0
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

//! Color palette for the OneLine UI.
//!
//! A minimal dark palette for the chrome, plus one accent color per line
//! theme standing in for the web client's gradient treatments.

use ratatui::style::Color;

use crate::models::LineTheme;

/// Primary border color.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and selection.
pub const COLOR_ACCENT: Color = Color::White;

/// Header/logo color.
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for secondary info (authors, timestamps, hints).
pub const COLOR_DIM: Color = Color::DarkGray;

/// Liked/bookmarked marker color.
pub const COLOR_MARKED: Color = Color::LightYellow;

/// Success notice color.
pub const COLOR_SUCCESS: Color = Color::LightGreen;

/// Error notice color.
pub const COLOR_ERROR: Color = Color::LightRed;

/// Info notice color.
pub const COLOR_INFO: Color = Color::Gray;

/// Premium crown color.
pub const COLOR_PREMIUM: Color = Color::Yellow;

/// The accent color for a line theme.
pub fn line_theme_color(theme: LineTheme) -> Color {
    match theme {
        LineTheme::Default => Color::Rgb(99, 102, 241),
        LineTheme::Sunset => Color::Rgb(249, 115, 22),
        LineTheme::Ocean => Color::Rgb(6, 182, 212),
        LineTheme::Forest => Color::Rgb(16, 185, 129),
        LineTheme::Royal => Color::Rgb(124, 58, 237),
        LineTheme::Fire => Color::Rgb(239, 68, 68),
    }
}

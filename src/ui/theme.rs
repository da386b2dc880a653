//! Theme: dark chrome around the user's palette, plus palette-to-terminal colors.

use ratatui::style::Color;

use crate::palette::HexColor;

pub mod colors {
    use super::*;
    /// Main canvas behind the panels.
    pub const BG: Color = Color::Rgb(0x18, 0x1c, 0x22);
    /// Input bar, status, command palette.
    pub const ELEVATED: Color = Color::Rgb(0x16, 0x1a, 0x1f);
    pub const BORDER: Color = Color::Rgb(0x2d, 0x34, 0x3e);
    /// Prompt, selection marker.
    pub const ACCENT: Color = Color::Rgb(0x6b, 0xbc, 0xff);
    pub const ACCENT_SOFT: Color = Color::Rgb(0x99, 0xd4, 0xff);
    pub const TEXT: Color = Color::Rgb(0xf2, 0xf4, 0xf8);
    pub const TEXT_DIM: Color = Color::Rgb(0xbc, 0xc5, 0xd0);
    pub const MUTED: Color = Color::Rgb(0x94, 0x9e, 0xad);
    pub const CODE_BG: Color = Color::Rgb(0x1e, 0x24, 0x2e);
    pub const ERROR: Color = Color::Rgb(0xf0, 0x6c, 0x6c);
    /// Stand-in for palette values that do not parse as hex.
    pub const FALLBACK: Color = Color::Rgb(0x80, 0x80, 0x80);
}

pub mod styles {
    use ratatui::style::{Modifier, Style};

    use super::colors;

    pub fn border() -> Style {
        Style::default().fg(colors::BORDER)
    }
    pub fn accent_bold() -> Style {
        Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)
    }
    pub fn title() -> Style {
        Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)
    }
    pub fn text_dim() -> Style {
        Style::default().fg(colors::TEXT_DIM)
    }
    pub fn muted() -> Style {
        Style::default().fg(colors::MUTED)
    }
    pub fn elevated_bg() -> Style {
        Style::default().bg(colors::ELEVATED)
    }
}

pub const HEADER_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;
/// Top border + one line of text.
pub const INPUT_HEIGHT: u16 = 2;
/// Five roles plus borders.
pub const EDITOR_HEIGHT: u16 = 7;
pub const MIN_BODY_LINES: u16 = 12;
/// Left column width as a percentage.
pub const LEFT_COLUMN_PCT: u16 = 40;
pub const PALETTE_MAX_HEIGHT: u16 = 14;
pub const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Terminal color for a palette value; unparseable values get [`colors::FALLBACK`].
pub fn palette_color(value: &str) -> Color {
    HexColor::parse(value)
        .map(|c| Color::Rgb(c.r, c.g, c.b))
        .unwrap_or(colors::FALLBACK)
}

/// Black or white, whichever reads better on `background`.
pub fn readable_on(background: &str) -> Color {
    match HexColor::parse(background) {
        Some(c) if c.is_light() => Color::Rgb(0x11, 0x11, 0x11),
        _ => Color::Rgb(0xfa, 0xfa, 0xfa),
    }
}

//! The five-role palette and its validated form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five semantic color roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Background,
    Surface,
}

impl ColorRole {
    /// Canonical order, also the order in which the normalizer checks keys.
    pub const ALL: [ColorRole; 5] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Surface,
    ];

    /// JSON key / CSS suffix.
    pub fn key(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Background => "background",
            ColorRole::Surface => "surface",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorRole::Primary => "Primary",
            ColorRole::Secondary => "Secondary",
            ColorRole::Accent => "Accent",
            ColorRole::Background => "Background",
            ColorRole::Surface => "Surface",
        }
    }

    /// What the role is used for in the previews.
    pub fn description(self) -> &'static str {
        match self {
            ColorRole::Primary => "Main brand color, headings",
            ColorRole::Secondary => "Supporting elements, borders",
            ColorRole::Accent => "Call-to-actions, highlights",
            ColorRole::Background => "Main page background",
            ColorRole::Surface => "Cards, panels, containers",
        }
    }

    pub fn from_key(key: &str) -> Option<ColorRole> {
        let key = key.trim().to_ascii_lowercase();
        ColorRole::ALL.into_iter().find(|r| r.key() == key)
    }

    pub fn next(self) -> ColorRole {
        let i = self.index();
        ColorRole::ALL[(i + 1) % ColorRole::ALL.len()]
    }

    pub fn prev(self) -> ColorRole {
        let i = self.index();
        let len = ColorRole::ALL.len();
        ColorRole::ALL[(i + len - 1) % len]
    }

    fn index(self) -> usize {
        ColorRole::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Five color strings. Manual edits write here without validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
}

impl Palette {
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Background => &self.background,
            ColorRole::Surface => &self.surface,
        }
    }

    pub fn get_mut(&mut self, role: ColorRole) -> &mut String {
        match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Accent => &mut self.accent,
            ColorRole::Background => &mut self.background,
            ColorRole::Surface => &mut self.surface,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        ValidatedPalette::default().into_inner()
    }
}

/// A palette whose five values all passed hex validation.
///
/// Only the response normalizer and [`ValidatedPalette::default`] construct
/// one, so holding this type is proof the invariant holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedPalette(Palette);

impl ValidatedPalette {
    pub(crate) fn from_checked(palette: Palette) -> Self {
        debug_assert!(ColorRole::ALL
            .iter()
            .all(|r| is_hex_color(palette.get(*r))));
        Self(palette)
    }

    pub fn as_palette(&self) -> &Palette {
        &self.0
    }

    pub fn into_inner(self) -> Palette {
        self.0
    }
}

impl Default for ValidatedPalette {
    fn default() -> Self {
        Self(Palette {
            primary: "#36454F".to_string(),
            secondary: "#2C3E50".to_string(),
            accent: "#463EBA".to_string(),
            background: "#F6F9FC".to_string(),
            surface: "#FFFFFF".to_string(),
        })
    }
}

/// `#` followed by exactly 3 or 6 hex digits.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// An RGB triple parsed from a hex color string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Parses `#RGB` / `#RRGGBB`, tolerating a missing `#` and surrounding spaces.
    pub fn parse(value: &str) -> Option<HexColor> {
        let value = value.trim();
        let digits = value.strip_prefix('#').unwrap_or(value);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let mut it = digits.chars().map(|c| {
                    let d = c.to_digit(16).unwrap_or(0) as u8;
                    d * 16 + d
                });
                Some(HexColor { r: it.next()?, g: it.next()?, b: it.next()? })
            }
            6 => Some(HexColor {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            _ => None,
        }
    }

    /// Perceived brightness in 0.0..=1.0.
    pub fn luminance(self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }

    pub fn is_light(self) -> bool {
        self.luminance() > 0.6
    }
}

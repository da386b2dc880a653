//! Response normalization: raw model text in, validated palette out.

use serde_json::Value;

use crate::error::PaletteError;
use crate::palette::{is_hex_color, ColorRole, Palette, ValidatedPalette};

/// Removes surrounding ```` ``` ```` / ```` ```json ```` fences, however deeply nested.
///
/// The result never starts with a fence and is trimmed, so applying this twice
/// gives the same result as applying it once.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    while let Some(rest) = text.strip_prefix("```") {
        // Language tag plus whatever whitespace follows it on the line.
        let body = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()).trim();
        text = body.strip_suffix("```").unwrap_or(body).trim();
    }
    text
}

/// Parses model output into a palette, all-or-nothing.
pub fn normalize(raw: &str) -> Result<ValidatedPalette, PaletteError> {
    let text = strip_code_fence(raw);
    let value: Value = serde_json::from_str(text).map_err(|e| PaletteError::MalformedResponse {
        text: raw.to_string(),
        reason: e.to_string(),
    })?;
    let Value::Object(map) = value else {
        return Err(PaletteError::MalformedResponse {
            text: raw.to_string(),
            reason: "expected a JSON object".to_string(),
        });
    };

    let mut palette = Palette::default();
    for role in ColorRole::ALL {
        let key = role.key();
        let received = map
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| PaletteError::MissingField(key.to_string()))?;
        *palette.get_mut(role) = normalize_hex(key, received)?;
    }
    Ok(ValidatedPalette::from_checked(palette))
}

/// Trims, prefixes `#` when absent, checks the grammar and upper-cases.
pub fn normalize_hex(key: &str, received: &str) -> Result<String, PaletteError> {
    let trimmed = received.trim();
    let candidate = if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    };
    if !is_hex_color(&candidate) {
        return Err(PaletteError::InvalidHexFormat {
            key: key.to_string(),
            value: trimmed.to_string(),
        });
    }
    Ok(candidate.to_ascii_uppercase())
}

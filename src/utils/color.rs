// src/utils/color.rs

//! Hex color helpers for course and shift display colors.

use crate::error::{AppError, Result};

/// Course colors, picked per course id.
const PALETTE: [&str; 12] = [
    "#5b8dd6", "#d65b5b", "#5bd68d", "#d6a35b", "#8d5bd6", "#5bc4d6",
    "#d65ba8", "#7fa35b", "#a35b3c", "#3c7fa3", "#a3933c", "#6b6b9e",
];

/// Pick a palette color for the given key.
///
/// The same key always yields the same color, so a course shared by two
/// degrees is painted identically in both.
pub fn palette_color(key: &str) -> &'static str {
    let sum = key.bytes().fold(0usize, |acc, b| acc.wrapping_add(b as usize));
    PALETTE[sum % PALETTE.len()]
}

/// Scale every channel of `color` by `amount`, clamped to `[0, 255]`.
///
/// An empty color stays empty. Channel values are truncated, not rounded.
pub fn shade_color(color: &str, amount: f64) -> Result<String> {
    if color.is_empty() {
        return Ok(String::new());
    }

    let channels = parse_hex(color)?;
    let shaded: Vec<u8> = channels
        .iter()
        .map(|&c| (c as f64 * amount).clamp(0.0, 255.0) as u8)
        .collect();

    Ok(format!("#{}", hex::encode(shaded)))
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` into its three color
/// channels. Alpha is dropped.
fn parse_hex(color: &str) -> Result<[u8; 3]> {
    let digits = color.strip_prefix('#').unwrap_or(color);
    let expanded = match digits.len() {
        3 | 4 => digits.chars().take(3).flat_map(|c| [c, c]).collect::<String>(),
        6 | 8 => digits.get(..6).unwrap_or_default().to_string(),
        _ => return Err(AppError::Color(color.to_string())),
    };

    match hex::decode(&expanded).as_deref() {
        Ok(&[r, g, b]) => Ok([r, g, b]),
        _ => Err(AppError::Color(color.to_string())),
    }
}

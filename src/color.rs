//! Color keys and the user-editable color substitution table.
//!
//! Colors are identified by their (R, G, B) triple; alpha never participates
//! in color identity. The canonical text form is lowercase `#rrggbb`, which
//! is what palette entries carry and what project files store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An (R, G, B) triple, the map key for palette and remap lookups.
pub type Rgb = (u8, u8, u8);

/// Parse a 6-hex-digit color. Case-insensitive, leading `#` optional.
///
/// Returns `None` for anything else; mapping entries are free text upstream,
/// so failure here is expected input rather than an error.
pub fn parse_hex(text: &str) -> Option<Rgb> {
    let hex = text.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Canonical lowercase `#rrggbb` form of a color.
pub fn to_hex((r, g, b): Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// User-defined exact-color substitution table.
///
/// Keys and values are hex color strings as typed in the editor. Source keys
/// are normalized to canonical form on insert so the same color cannot appear
/// twice under different spellings; values stay as entered and are validated
/// lazily: an entry whose value does not parse is skipped at apply time.
/// Entries mapping a color to itself are allowed and harmless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorMapping {
    entries: HashMap<String, String>,
}

impl ColorMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a source → target entry.
    pub fn set(&mut self, source: &str, target: &str) {
        self.entries
            .insert(Self::normalize(source), target.trim().to_string());
    }

    /// Remove the entry for a source color, if present.
    pub fn remove(&mut self, source: &str) {
        self.entries.remove(&Self::normalize(source));
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve to an RGB lookup table, skipping entries where either side
    /// fails to parse.
    pub fn resolve(&self) -> HashMap<Rgb, Rgb> {
        let mut table = HashMap::with_capacity(self.entries.len());
        for (source, target) in &self.entries {
            if let (Some(from), Some(to)) = (parse_hex(source), parse_hex(target)) {
                table.insert(from, to);
            }
        }
        table
    }

    fn normalize(source: &str) -> String {
        match parse_hex(source) {
            Some(rgb) => to_hex(rgb),
            None => source.trim().to_string(),
        }
    }
}

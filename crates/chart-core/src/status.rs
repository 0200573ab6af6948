// File: crates/chart-core/src/status.rs
// Summary: Status labels and the fixed status -> point color lookup.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const GOOD: &str = "GOOD";
pub const WARNING: &str = "WARNING";
pub const ERROR: &str = "ERROR";

/// 8-bit RGBA color. Serialized as `#rrggbb` (or `#rrggbbaa` when not opaque).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, ch) in out.iter_mut().zip(hex.chars()) {
                    let v = ch.to_digit(16)? as u8;
                    *slot = v * 16 + v;
                }
                Some(Self::rgb(out[0], out[1], out[2]))
            }
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color {s:?}")))
    }
}

/// Status -> color table with a fallback for statuses outside the table.
/// Lookups are exact (case-sensitive) matches on the status label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPalette {
    pub colors: BTreeMap<String, Color>,
    pub fallback: Color,
}

impl StatusPalette {
    pub fn standard() -> Self {
        let colors = [
            (GOOD, Color::rgb(0x52, 0xc4, 0x1a)),
            (WARNING, Color::rgb(0xfa, 0xad, 0x14)),
            (ERROR, Color::rgb(0xf5, 0x22, 0x2d)),
        ]
        .into_iter()
        .map(|(k, c)| (k.to_string(), c))
        .collect();
        Self { colors, fallback: Color::rgb(0x8c, 0x8c, 0x8c) }
    }

    pub fn with_color(mut self, status: impl Into<String>, color: Color) -> Self {
        self.colors.insert(status.into(), color);
        self
    }

    /// Color for one point's status.
    pub fn color(&self, status: &str) -> Color {
        self.colors.get(status).copied().unwrap_or(self.fallback)
    }

    pub fn is_known(&self, status: &str) -> bool {
        self.colors.contains_key(status)
    }
}

impl Default for StatusPalette {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert_eq!(Color::from_hex("#52c41a"), Some(Color::rgb(0x52, 0xc4, 0x1a)));
        assert_eq!(Color::from_hex("fff"), Some(Color::rgb(255, 255, 255)));
        assert_eq!(Color::from_hex("#00000080"), Some(Color::rgba(0, 0, 0, 0x80)));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
        assert_eq!(Color::from_hex("#+f+f+f"), None);
        assert_eq!(Color::from_hex("+1+2+3+4"), None);
        assert_eq!(Color::rgb(0xf5, 0x22, 0x2d).to_hex(), "#f5222d");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn unknown_status_uses_fallback() {
        let p = StatusPalette::standard();
        assert_eq!(p.color("UNKNOWN_STATUS"), p.fallback);
        assert_eq!(p.color("good"), p.fallback);
        assert_ne!(p.color(GOOD), p.color(ERROR));
        assert!(p.is_known(WARNING));
    }

    #[test]
    fn custom_entries_override() {
        let p = StatusPalette::standard().with_color("DEGRADED", Color::rgb(1, 2, 3));
        assert_eq!(p.color("DEGRADED"), Color::rgb(1, 2, 3));
    }
}

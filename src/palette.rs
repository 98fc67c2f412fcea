//! Color palette and theme file support.
//!
//! The palette is a fixed ordered table of named color slots. It is built
//! once at startup, either the built-in theme or a TOML theme file, and
//! immutable afterwards. The highlighter refers to colors exclusively by
//! slot index; indexed lookup is range-checked so an out-of-range index
//! from a classifier surfaces as a loud error instead of being clamped.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::canvas::Color;

/// Number of palette slots.
pub const PALETTE_SIZE: usize = 11;

/// Named palette slots, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Slot {
    Default = 0,
    Preprocessor = 1,
    Type = 2,
    Keyword = 3,
    Number = 4,
    String = 5,
    Comment = 6,
    FunctionCall = 7,
    Symbol = 8,
    Background = 9,
    Border = 10,
}

impl Slot {
    /// Palette index of this slot.
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Fixed ordered color table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

impl Default for Palette {
    /// The built-in dark theme.
    fn default() -> Self {
        let mut colors = [Color::opaque(255, 255, 255); PALETTE_SIZE];
        colors[Slot::Default as usize] = Color::opaque(255, 255, 255);
        colors[Slot::Preprocessor as usize] = Color::opaque(197, 120, 221);
        colors[Slot::Type as usize] = Color::opaque(229, 192, 123);
        colors[Slot::Keyword as usize] = Color::opaque(224, 108, 117);
        colors[Slot::Number as usize] = Color::opaque(209, 154, 102);
        colors[Slot::String as usize] = Color::opaque(152, 195, 121);
        colors[Slot::Comment as usize] = Color::opaque(152, 152, 152);
        colors[Slot::FunctionCall as usize] = Color::opaque(97, 175, 239);
        colors[Slot::Symbol as usize] = Color::opaque(86, 182, 194);
        colors[Slot::Background as usize] = Color::opaque(10, 10, 10);
        colors[Slot::Border as usize] = Color::opaque(40, 40, 40);
        Self { colors }
    }
}

impl Palette {
    /// Range-checked lookup by raw palette index.
    ///
    /// Returns `None` for indices outside the table; the decoder turns
    /// that into a protocol-violation error.
    pub fn get(&self, index: u8) -> Option<Color> {
        self.colors.get(index as usize).copied()
    }

    /// Lookup by named slot.
    pub fn color(&self, slot: Slot) -> Color {
        self.colors[slot as usize]
    }

    /// Build a palette from a theme, falling back to the built-in color for
    /// every slot the theme leaves unset.
    pub fn from_theme(theme: &Theme) -> Result<Self> {
        let mut palette = Self::default();

        let overrides = [
            (Slot::Default, &theme.default),
            (Slot::Preprocessor, &theme.preprocessor),
            (Slot::Type, &theme.types),
            (Slot::Keyword, &theme.keyword),
            (Slot::Number, &theme.number),
            (Slot::String, &theme.string),
            (Slot::Comment, &theme.comment),
            (Slot::FunctionCall, &theme.function_call),
            (Slot::Symbol, &theme.symbol),
            (Slot::Background, &theme.background),
            (Slot::Border, &theme.border),
        ];

        for (slot, value) in overrides {
            if let Some(hex) = value {
                palette.colors[slot as usize] = parse_hex(hex)
                    .with_context(|| format!("Invalid color for {:?} slot", slot))?;
            }
        }

        Ok(palette)
    }
}

/// A theme file: per-slot colors as `#RRGGBB` / `#RRGGBBAA` strings.
///
/// Every field is optional; unset slots keep the built-in color.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Theme {
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub preprocessor: Option<String>,
    /// "type" is reserved in too many contexts; the file key is "types".
    #[serde(default)]
    pub types: Option<String>,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub string: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub function_call: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
}

impl Theme {
    /// Load a theme from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse theme file: {}", path.display()))
    }
}

/// Parse a `#RRGGBB` or `#RRGGBBAA` color string.
fn parse_hex(hex: &str) -> Result<Color> {
    let digits = match hex.strip_prefix('#') {
        Some(d) => d,
        None => bail!("Expected leading '#' (got: {:?})", hex),
    };
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        bail!("Invalid hex digits in {:?}", hex);
    }

    let byte = |range: std::ops::Range<usize>| -> Result<u8> {
        u8::from_str_radix(&digits[range], 16)
            .with_context(|| format!("Invalid hex digits in {:?}", hex))
    };

    match digits.len() {
        6 => Ok(Color::opaque(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
        8 => Ok(Color::new(
            byte(0..2)?,
            byte(2..4)?,
            byte(4..6)?,
            byte(6..8)?,
        )),
        n => bail!("Expected 6 or 8 hex digits, got {} (in {:?})", n, hex),
    }
}

// src/views/palette.rs
//
// Fixed foreground palette plus background color.
// One foreground color per block index, wrapping when there are more
// blocks than colors.

use nannou::prelude::*;

use crate::config::{ConfigError, StyleConfig};

#[derive(Debug, Clone)]
pub struct Palette {
    foreground: Vec<Rgb>,
    background: Rgb,
}

impl Palette {
    pub fn from_config(style: &StyleConfig) -> Result<Self, ConfigError> {
        if style.palette.is_empty() {
            return Err(ConfigError::Invalid {
                field: "style.palette",
                reason: String::from("needs at least one color"),
            });
        }
        let foreground = style
            .palette
            .iter()
            .map(|hex| parse_hex_color(hex))
            .collect::<Result<Vec<_>, _>>()?;
        let background = parse_hex_color(&style.background)?;

        Ok(Self {
            foreground,
            background,
        })
    }

    pub fn block_color(&self, index: usize) -> Rgb {
        self.foreground[index % self.foreground.len()]
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

}

impl Default for Palette {
    fn default() -> Self {
        // the built-in colors are known-good
        Self::from_config(&StyleConfig::default()).unwrap_or_else(|_| Self {
            foreground: vec![rgb(0.0, 0.0, 0.0)],
            background: rgb(1.0, 1.0, 1.0),
        })
    }
}

/// Parses `#RRGGBB` into a linear 0..1 color.
pub fn parse_hex_color(value: &str) -> Result<Rgb, ConfigError> {
    let invalid = || ConfigError::InvalidColor {
        value: value.to_string(),
    };

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| invalid())
    };

    Ok(rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

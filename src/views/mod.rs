// src/views/mod.rs

pub mod palette;

pub use palette::{parse_hex_color, Palette};

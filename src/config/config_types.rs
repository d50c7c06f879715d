// src/config/config_types.rs
//
// Config types for the app. Every section falls back to the compiled
// defaults below when config.toml omits it.

use serde::Deserialize;

pub const DEFAULT_NODES: usize = 5;
pub const DEFAULT_SQUARES: usize = 4;
pub const DEFAULT_SCALE_STEP: f32 = 0.01;
pub const DEFAULT_TICK_DELAY_MS: u64 = 30;
pub const DEFAULT_BLOCK_SIZE_FACTOR: f32 = 8.0;
pub const DEFAULT_FOREGROUND: [&str; 4] = ["#311B92", "#4527A0", "#512DA8", "#5E35B1"];
pub const DEFAULT_BACKGROUND: &str = "#BDBDBD";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("bouncyblocks"),
            width: 540,
            height: 960,
            fullscreen: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub nodes: usize,   // Number of linked rows
    pub squares: usize, // Blocks drawn per row
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            nodes: DEFAULT_NODES,
            squares: DEFAULT_SQUARES,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub scale_step: f32,    // Scale change per tick
    pub tick_delay_ms: u64, // Minimum time between ticks
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            scale_step: DEFAULT_SCALE_STEP,
            tick_delay_ms: DEFAULT_TICK_DELAY_MS,
        }
    }
}

impl AnimationConfig {
    pub fn tick_delay_secs(&self) -> f32 {
        self.tick_delay_ms as f32 / 1000.0
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub palette: Vec<String>,
    pub background: String,
    pub block_size_factor: f32, // Full block edge = row width / factor
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_FOREGROUND.iter().map(|c| c.to_string()).collect(),
            background: DEFAULT_BACKGROUND.to_string(),
            block_size_factor: DEFAULT_BLOCK_SIZE_FACTOR,
        }
    }
}

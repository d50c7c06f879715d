// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::{AnimationConfig, ChainConfig, ConfigError, StyleConfig, WindowConfig};
use crate::views::Palette;

const CONFIG_FILE: &str = "config.toml";

// Smaller steps get lost to f32 rounding near 1.0 and the scale never arrives.
pub const MIN_SCALE_STEP: f32 = 1e-4;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub chain: ChainConfig,
    pub animation: AnimationConfig,
    pub style: StyleConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, then the working
    /// directory. Falls back to the compiled defaults when neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::load_from(&path)
            }
            None => {
                log::warn!("No {} found, using built-in defaults", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn locate() -> Option<PathBuf> {
        let exe_config = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(CONFIG_FILE)));

        if let Some(path) = exe_config.filter(|p| p.exists()) {
            return Some(path);
        }

        let cwd_config = PathBuf::from(CONFIG_FILE);
        cwd_config.exists().then_some(cwd_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain.nodes == 0 {
            return Err(ConfigError::Invalid {
                field: "chain.nodes",
                reason: String::from("must be at least 1"),
            });
        }
        if self.chain.squares == 0 {
            return Err(ConfigError::Invalid {
                field: "chain.squares",
                reason: String::from("must be at least 1"),
            });
        }
        let step = self.animation.scale_step;
        if !(MIN_SCALE_STEP..=1.0).contains(&step) {
            return Err(ConfigError::Invalid {
                field: "animation.scale_step",
                reason: format!("{} is outside [{}, 1]", step, MIN_SCALE_STEP),
            });
        }
        if !(self.style.block_size_factor > 0.0) {
            return Err(ConfigError::Invalid {
                field: "style.block_size_factor",
                reason: String::from("must be positive"),
            });
        }
        Palette::from_config(&self.style)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.chain.nodes, 5);
        assert_eq!(config.chain.squares, 4);
        assert_eq!(config.animation.scale_step, 0.01);
        assert_eq!(config.animation.tick_delay_ms, 30);
        assert_eq!(config.style.palette.len(), 4);
        assert_eq!(config.style.background, "#BDBDBD");
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml(
            r#"
            [chain]
            nodes = 3

            [animation]
            tick_delay_ms = 16
            "#,
        )
        .unwrap();
        assert_eq!(config.chain.nodes, 3);
        assert_eq!(config.chain.squares, 4);
        assert_eq!(config.animation.tick_delay_ms, 16);
        assert!((config.animation.tick_delay_secs() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_zero_nodes() {
        let err = Config::from_toml("[chain]\nnodes = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "chain.nodes", .. }));
    }

    #[test]
    fn test_rejects_bad_step() {
        let err = Config::from_toml("[animation]\nscale_step = 1.5").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "animation.scale_step",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_vanishing_step() {
        for toml in [
            "[animation]\nscale_step = 1e-9",
            "[animation]\nscale_step = 0.0",
            "[animation]\nscale_step = nan",
        ] {
            let err = Config::from_toml(toml).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::Invalid {
                    field: "animation.scale_step",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_smallest_step_still_completes() {
        let config = Config::from_toml("[animation]\nscale_step = 1e-4").unwrap();
        let mut state = crate::animation::ScaleState::new(config.animation.scale_step);
        for expected in [1.0, 0.0] {
            state.start_updating();
            let mut ticks = 0;
            let completed = loop {
                ticks += 1;
                assert!(ticks < 20_000, "step never completed");
                if let crate::animation::ScaleUpdate::Completed(scale) = state.update() {
                    break scale;
                }
            };
            assert_eq!(completed, expected);
        }
    }

    #[test]
    fn test_rejects_bad_color() {
        let err = Config::from_toml("[style]\nbackground = \"grey\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { .. }));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = Config::from_toml("[chain\nnodes = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::load_from(Path::new("/nonexistent/bouncyblocks.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

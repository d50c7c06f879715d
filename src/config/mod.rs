pub mod config_error;
pub mod config_load;
pub mod config_types;

pub use config_error::ConfigError;
pub use config_load::Config;
pub use config_types::{AnimationConfig, ChainConfig, StyleConfig, WindowConfig};

//! Configuration loading
//!
//! Settings live in `<config dir>/tagmatter/config.toml`. A missing file is
//! not an error; every field has a default so a partial file works too.

mod types;

use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::error::TagmatterError;

pub use types::{Config, TagsConfig};

/// Path of the user config file, if a config directory exists on this
/// platform.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tagmatter").join("config.toml"))
}

/// Load the user config, falling back to defaults when the file is absent.
pub fn load() -> Result<Config, TagmatterError> {
    match config_path() {
        Some(path) if path.is_file() => {
            let text = fs::read_to_string(&path)?;
            let config = toml::from_str(&text)
                .map_err(|e| TagmatterError::InvalidConfig(e.to_string()))?;
            debug!("loaded config from {}", path.display());
            Ok(config)
        }
        _ => Ok(Config::default()),
    }
}

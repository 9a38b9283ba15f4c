// src/config/mod.rs

pub mod types;

pub use types::{Config, OutputLayout};

use crate::error::CleanError;
use anyhow::Context;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Source of run options.
pub trait ConfigLoader {
    fn load(&self, path: &Path) -> Result<Config, CleanError>;
}

/// Reads a JSON object from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonConfigLoader;

impl ConfigLoader for JsonConfigLoader {
    fn load(&self, path: &Path) -> Result<Config, CleanError> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CleanError::ConfigNotFound(path.to_path_buf()))
            }
            Err(e) => {
                return Err(CleanError::Io(
                    anyhow::Error::new(e)
                        .context(format!("reading config {}", path.display())),
                ))
            }
        };

        let config: Config =
            serde_json::from_str(&text).map_err(|source| CleanError::ConfigInvalid {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(?config, "parsed config");
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// Resolve a config path: an explicit one wins, otherwise `config.json` in the cwd.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(p) => Ok(p),
        None => {
            let cwd = std::env::current_dir().context("reading current directory")?;
            Ok(cwd.join(DEFAULT_CONFIG_FILE))
        }
    }
}

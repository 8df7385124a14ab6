use std::env;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::render::OutputFormat;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "ASOD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
pub struct AsodConfig {
    pub output: Option<OutputConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogConfig {
    pub filter: Option<String>,
    pub file: Option<PathBuf>,
}

impl AsodConfig {
    /// Load from `$ASOD_CONFIG` or `~/.asod/config.toml`.
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load `path` (or the default location) before logging is up.
    ///
    /// A broken config never stops classification: the failure is pushed onto
    /// `init_warnings` for the caller to log once a subscriber exists, and
    /// defaults apply.
    pub fn load_or_warn(path: Option<&Path>, init_warnings: &mut Vec<String>) -> Option<Self> {
        let loaded = match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        };
        match loaded {
            Ok(config) => config,
            Err(err) => {
                init_warnings.push(format!("{err}; using defaults"));
                None
            }
        }
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|output| output.format)
    }

    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.log.as_ref().and_then(|log| log.filter.as_deref())
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log.as_ref().and_then(|log| log.file.as_deref())
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".asod").join("config.toml"))
}

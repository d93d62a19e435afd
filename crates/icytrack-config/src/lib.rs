//! `icytrack.toml` configuration.
//!
//! Every section and key is optional; missing values take their defaults and
//! unknown keys are rejected so typos surface instead of being ignored.

use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// File looked up in the working directory when no override is set.
pub const CONFIG_FILE_NAME: &str = "icytrack.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ICYTRACK_CONFIG";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// TrackConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackConfig {
    pub validate: ValidateConfig,
    pub log: LogConfig,
}

impl TrackConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    /// Load from `$ICYTRACK_CONFIG`, then `./icytrack.toml`, else defaults.
    ///
    /// An explicit `$ICYTRACK_CONFIG` that cannot be read is an error.
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Self::load(PathBuf::from(path));
        }

        let local = Path::new(CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::load(local);
        }

        Ok(Self::default())
    }
}

///
/// ValidateConfig
/// Strictness of the consumer-side schema validation pass.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidateConfig {
    /// Reject track declarations that name no rules and leave `files` off.
    pub deny_inert: bool,
}

///
/// LogConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,

    /// Emit newline-delimited JSON instead of human-readable lines.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

///
/// TESTS
///

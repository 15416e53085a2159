// src/config.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LinkError, Result};
use crate::types::Platform;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "leaguelink.toml";

/// Default reach cap for the `reach` command.
pub const DEFAULT_MAX_DEGREES: usize = 3;

#[derive(Debug, Clone)]
pub struct Config {
    /// Default league collection to load when `--input` is not given.
    pub input: Option<PathBuf>,
    pub platform: Option<Platform>,
    pub season: Option<String>,
    pub sport: Option<String>,
    pub max_degrees: usize,
    pub verbose: bool,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: None,
            platform: None,
            season: None,
            sport: None,
            max_degrees: DEFAULT_MAX_DEGREES,
            verbose: false,
        }
    }

    /// Loads settings from a TOML file over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| LinkError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let file: ConfigFile = toml::from_str(&content)?;
        Ok(file.merge_into(Self::new()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_degrees` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_degrees == 0 {
            return Err(LinkError::Config(
                "max_degrees must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// On-disk shape of `leaguelink.toml`. Every key is optional; absent keys
/// keep the built-in defaults.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    input: Option<PathBuf>,
    platform: Option<Platform>,
    season: Option<String>,
    sport: Option<String>,
    max_degrees: Option<usize>,
}

impl ConfigFile {
    fn merge_into(self, mut config: Config) -> Config {
        if self.input.is_some() {
            config.input = self.input;
        }
        if self.platform.is_some() {
            config.platform = self.platform;
        }
        if self.season.is_some() {
            config.season = self.season;
        }
        if self.sport.is_some() {
            config.sport = self.sport;
        }
        if let Some(max_degrees) = self.max_degrees {
            config.max_degrees = max_degrees;
        }
        config
    }
}

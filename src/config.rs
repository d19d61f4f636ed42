use serde::Deserialize;
use std::env;
use std::error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_PATH_ENV_VAR: &str = "ALMANAC_CONFIG_FILE";

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    NotFound(PathBuf),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "could not read config file: {}", err),
            ConfigError::Parse(err) => write!(f, "invalid config file: {}", err),
            ConfigError::NotFound(path) => {
                write!(f, "config file does not exist: {}", path.display())
            }
        }
    }
}

impl error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Year the schedule is laid out in.
    pub year: i32,
    /// Update tick of the UI loop in milliseconds.
    pub tick_rate_ms: u64,
    /// Window of the "upcoming" side panel in days.
    pub upcoming_days: i64,
    /// Maximum number of entries in the "upcoming" side panel.
    pub upcoming_limit: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            year: 2026,
            tick_rate_ms: 500,
            upcoming_days: 7,
            upcoming_limit: 5,
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn parse(input: &str) -> Result<Config, ConfigError> {
        toml::from_str(input).map_err(ConfigError::from)
    }

    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        Config::parse(&content)
    }
}

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(mut path) = dirs::config_dir() {
        path.push("almanac");
        path.push("config.toml");
        locations.push(path);
    }

    if let Some(mut path) = dirs::home_dir() {
        path.push(".almanac.toml");
        locations.push(path);
    }

    locations
}

/// Load the configuration from the given path, or from the first existing
/// candidate location, or fall back to the defaults.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        return Config::load(path);
    }

    for location in find_configfile_locations() {
        if location.exists() {
            log::info!("Using config file '{}'", location.display());
            return Config::load(&location);
        }
    }

    log::info!("No config file found, using defaults");
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.year, 2026);
        assert_eq!(config.tick_rate(), Duration::from_millis(500));
        assert_eq!(config.upcoming_days, 7);
        assert_eq!(config.upcoming_limit, 5);
    }

    #[test]
    fn parses_partial_config() {
        let config = Config::parse("year = 2024\ntick_rate_ms = 250\n").unwrap();
        assert_eq!(config.year, 2024);
        assert_eq!(config.tick_rate_ms, 250);
        // Unset fields keep their defaults.
        assert_eq!(config.upcoming_limit, 5);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(Config::parse("years = 2024\n").is_err());
    }
}

//! Runtime configuration.
//!
//! One secret: the timezonedb API key. The environment variable wins; a TOML
//! file in the platform config directory is the fallback. A missing key is
//! not an error — the request is simply sent unauthenticated and fails
//! server-side, which surfaces as the usual fetch-failure sentinel.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "TIMEZONE_DB_API_KEY";

const CONFIG_DIR: &str = "floating-clock";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Loads configuration once at process start.
    pub fn load() -> Self {
        match env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => return Self { api_key: key },
            _ => {}
        }
        match Self::config_path() {
            Some(path) => Self::from_file(&path),
            None => {
                tracing::warn!("could not determine config directory");
                Self::default()
            }
        }
    }

    /// `<config_dir>/floating-clock/config.toml`.
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Reads the TOML file, degrading to defaults if it is absent or
    /// malformed.
    fn from_file(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&text) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring malformed config file");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_supplies_the_api_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"abc123\"").unwrap();
        let config = Config::from_file(file.path());
        assert_eq!(config.api_key, "abc123");
    }

    #[test]
    fn missing_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file(&dir.path().join("nope.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_file_degrades_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = [this is not toml").unwrap();
        let config = Config::from_file(file.path());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"k\"\nfuture_knob = 3").unwrap();
        assert_eq!(Config::from_file(file.path()).api_key, "k");
    }

    #[test]
    fn environment_variable_takes_precedence() {
        env::set_var(API_KEY_ENV, "from-env");
        let config = Config::load();
        env::remove_var(API_KEY_ENV);
        assert_eq!(config.api_key, "from-env");
    }
}

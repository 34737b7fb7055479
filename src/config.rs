//! Configuration file support for numpick.
//!
//! Configuration is loaded from `~/.config/numpick/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/numpick/config.toml
//! upper_bound = 38
//! instant_mode = false
//! always_on_top = true
//! tick_ms = 10
//! exclude = [7, 21]
//! ```
//!
//! Nothing is ever written back: every launch starts from this file (or the
//! defaults).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::engine::{DEFAULT_TICK, Exclusions};
use crate::error::{PickerError, Result};
use crate::range::RangeConfig;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Initial upper bound of the range (normalized like range field input)
    pub upper_bound: Option<i64>,

    /// Start with instant mode enabled
    pub instant_mode: Option<bool>,

    /// Keep the window above others, where the host supports it
    pub always_on_top: Option<bool>,

    /// Milliseconds between frames of the continuous draw
    pub tick_ms: Option<u64>,

    /// Ids never drawn
    pub exclude: Vec<u32>,
}

/// Overrides collected from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub upper_bound: Option<String>,
    pub instant_mode: bool,
    pub exclude: Option<Vec<u32>>,
}

impl Config {
    /// Load configuration from `path`, or the default path when `None`.
    ///
    /// Returns default configuration if the file doesn't exist or can't be parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Self::default();
        }

        match Self::read(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Read and parse a config file.
    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| PickerError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("numpick")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, overrides: CliOverrides) -> Self {
        if let Some(text) = overrides.upper_bound {
            // CLI text is normalized like a range field edit
            let mut range = RangeConfig::default();
            self.upper_bound = Some(i64::try_from(range.set_from_text(&text)).unwrap_or(i64::MAX));
        }
        if overrides.instant_mode {
            self.instant_mode = Some(true);
        }
        if let Some(exclude) = overrides.exclude {
            self.exclude = exclude;
        }
        self
    }

    /// Initial range, normalized the same way as range field edits.
    pub fn range(&self) -> RangeConfig {
        let mut range = RangeConfig::default();
        if let Some(bound) = self.upper_bound {
            range.set_from_text(&bound.to_string());
        }
        range
    }

    pub fn instant_mode(&self) -> bool {
        self.instant_mode.unwrap_or(false)
    }

    pub fn always_on_top(&self) -> bool {
        self.always_on_top.unwrap_or(true)
    }

    pub fn tick(&self) -> Duration {
        self.tick_ms
            .map(|ms| Duration::from_millis(ms.max(1)))
            .unwrap_or(DEFAULT_TICK)
    }

    pub fn exclusions(&self) -> Exclusions {
        Exclusions::new(self.exclude.iter().map(|&id| u64::from(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.range().upper_bound(), 45);
        assert!(!config.instant_mode());
        assert!(config.always_on_top());
        assert_eq!(config.tick(), Duration::from_millis(10));
        assert!(config.exclusions().is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            upper_bound = 30
            instant_mode = true
            always_on_top = false
            tick_ms = 25
            exclude = [3, 5]
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.range().upper_bound(), 30);
        assert!(config.instant_mode());
        assert!(!config.always_on_top());
        assert_eq!(config.tick(), Duration::from_millis(25));
        assert!(config.exclusions().contains(3));
        assert!(config.exclusions().contains(5));
    }

    #[test]
    fn test_upper_bound_normalized() {
        let config: Config = toml::from_str("upper_bound = -4").unwrap();
        assert_eq!(config.range().upper_bound(), 1);

        let config: Config = toml::from_str("tick_ms = 0").unwrap();
        assert_eq!(config.tick(), Duration::from_millis(1));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config: Config = toml::from_str("upper_bound = 30\nexclude = [1]").unwrap();
        let config = config.with_overrides(CliOverrides {
            upper_bound: Some("12".to_string()),
            instant_mode: true,
            exclude: Some(vec![4]),
        });

        assert_eq!(config.range().upper_bound(), 12);
        assert!(config.instant_mode());
        assert_eq!(config.exclude, vec![4]);
    }

    #[test]
    fn test_cli_garbage_bound_falls_back_to_default() {
        let config = Config::default().with_overrides(CliOverrides {
            upper_bound: Some("lots".to_string()),
            ..Default::default()
        });
        assert_eq!(config.range().upper_bound(), 45);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/numpick/config.toml")));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_read_reports_bad_toml() {
        let path = std::env::temp_dir().join(format!("numpick_bad_{}.toml", std::process::id()));
        std::fs::write(&path, "upper_bound = [").unwrap();
        let err = Config::read(&path).unwrap_err();
        assert!(matches!(err, PickerError::Config { .. }));
        let _ = std::fs::remove_file(&path);
    }
}

//! Configuration loading and typed config structures for the Dungeon game.
//!
//! The configuration lives in `dungeon.yaml`. This module defines
//! strongly-typed structs that mirror the YAML structure. Every field has a
//! default, so an empty file (or no file at all) yields a playable game.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::clock;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// World seed and start date.
    #[serde(default)]
    pub world: WorldConfig,

    /// The player-controlled creature.
    #[serde(default)]
    pub hero: HeroConfig,

    /// Real-time pacing.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Lines the hero may dream while sleeping.
    #[serde(default = "default_dreams")]
    pub dreams: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            hero: HeroConfig::default(),
            timing: TimingConfig::default(),
            logging: LoggingConfig::default(),
            dreams: default_dreams(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Random seed for the world generator, sleep jitter, and dreams.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// World time when the game starts.
    #[serde(default = "clock::default_start")]
    pub start_date: NaiveDateTime,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            start_date: clock::default_start(),
        }
    }
}

/// Hero configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeroConfig {
    /// Display name.
    #[serde(default = "default_hero_name")]
    pub name: String,

    /// Maximum (and starting) health.
    #[serde(default = "default_hero_health")]
    pub health: u32,

    /// Base attack, before weapons.
    #[serde(default = "default_hero_attack")]
    pub attack: u32,

    /// How many items the hero can carry.
    #[serde(default = "default_item_limit")]
    pub item_limit: u32,

    /// How much weight the hero can carry.
    #[serde(default = "default_weight_limit")]
    pub weight_limit: u64,

    /// Birth date, used for age and birthday messages.
    #[serde(default = "default_date_of_birth")]
    pub date_of_birth: NaiveDateTime,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            name: default_hero_name(),
            health: default_hero_health(),
            attack: default_hero_attack(),
            item_limit: default_item_limit(),
            weight_limit: default_weight_limit(),
            date_of_birth: default_date_of_birth(),
        }
    }
}

/// Real-time pacing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// Wall-clock milliseconds spent per simulated hour of sleep.
    /// Zero disables pacing.
    #[serde(default = "default_sleep_ms_per_hour")]
    pub sleep_ms_per_hour: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            sleep_ms_per_hour: default_sleep_ms_per_hour(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG`
    /// is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable logs.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_seed() -> u64 {
    42
}

fn default_hero_name() -> String {
    "Hero".to_owned()
}

const fn default_hero_health() -> u32 {
    50
}

const fn default_hero_attack() -> u32 {
    4
}

const fn default_item_limit() -> u32 {
    10
}

const fn default_weight_limit() -> u64 {
    60
}

fn default_date_of_birth() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2035, 6, 4)
        .and_then(|date| date.and_hms_opt(8, 30, 0))
        .unwrap_or_default()
}

const fn default_sleep_ms_per_hour() -> u64 {
    500
}

fn default_log_level() -> String {
    "warn".to_owned()
}

fn default_dreams() -> Vec<String> {
    [
        "You dream of a river that flows uphill.",
        "You dream of an empty city lit by a green moon.",
        "You dream of a door you cannot open.",
        "You dream of wolves singing in a language you almost understand.",
        "You dream that you are falling, but never land.",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Datelike;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.world.seed, 42);
        assert_eq!(config.hero.name, "Hero");
        assert_eq!(config.hero.health, 50);
        assert_eq!(config.timing.sleep_ms_per_hour, 500);
        assert_eq!(config.hero.date_of_birth.year(), 2035);
    }

    #[test]
    fn serde_defaults_match_default_impl() {
        let parsed = GameConfig::parse("world:\n  seed: 42\n").unwrap();
        assert_eq!(parsed, GameConfig::default());
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(GameConfig::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
world:
  seed: 7
  start_date: "2060-01-01T21:00:00"
hero:
  name: "Ada"
  health: 80
  attack: 6
  item_limit: 3
  weight_limit: 15
  date_of_birth: "2040-01-01T00:00:00"
timing:
  sleep_ms_per_hour: 0
logging:
  level: debug
  json: true
dreams:
  - "A single dream."
"#;
        let config = GameConfig::parse(yaml).unwrap();
        assert_eq!(config.world.seed, 7);
        assert_eq!(config.world.start_date.year(), 2060);
        assert_eq!(config.hero.name, "Ada");
        assert_eq!(config.hero.item_limit, 3);
        assert_eq!(config.timing.sleep_ms_per_hour, 0);
        assert!(config.logging.json);
        assert_eq!(config.dreams, vec!["A single dream.".to_owned()]);
    }

    #[test]
    fn bad_yaml_is_an_error() {
        let result = GameConfig::parse("hero: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = GameConfig::from_file(Path::new("/definitely/not/here/dungeon.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}

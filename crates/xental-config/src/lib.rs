//! Configuration for the Xental landing.
//!
//! Read from `config.toml` in the platform config directory. Every field has
//! a default, so a missing file or a partial file both work.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use xental_core::AnimationSpeed;

/// Environment variable overriding [`WaitlistConfig::base_url`].
pub const ENV_WAITLIST_URL: &str = "XENTAL_WAITLIST_URL";
/// Environment variable overriding [`WaitlistConfig::api_key`].
pub const ENV_WAITLIST_KEY: &str = "XENTAL_WAITLIST_KEY";

const CONFIG_FILE: &str = "config.toml";

/// Errors from loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Particle background settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Number of particles.
    pub particle_count: usize,
    /// Surface units per terminal pixel (half a cell tall).
    pub units_per_pixel: f32,
    /// Frame rate preset.
    pub speed: AnimationSpeed,
    /// Particle count above which links use a spatial grid.
    pub grid_threshold: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            units_per_pixel: 4.0,
            speed: AnimationSpeed::default(),
            grid_threshold: 200,
        }
    }
}

/// Hosted waitlist table settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitlistConfig {
    /// Project URL. Empty keeps signups in memory.
    pub base_url: String,
    pub table: String,
    pub api_key: String,
    /// Value of the `source` column.
    pub source: String,
    pub timeout_secs: u64,
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            table: "waitlist_emails".to_string(),
            api_key: String::new(),
            source: "landing_page".to_string(),
            timeout_secs: 10,
        }
    }
}

impl WaitlistConfig {
    /// Whether a remote table is configured.
    pub fn is_remote(&self) -> bool {
        !self.base_url.trim().is_empty()
    }
}

/// Loading splash settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub duration_ms: u64,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self { duration_ms: 1500 }
    }
}

/// Full configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub animation: AnimationConfig,
    pub waitlist: WaitlistConfig,
    pub splash: SplashConfig,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("ai", "xental", "xental")
}

impl Config {
    /// Default location of the config file.
    pub fn path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Directory for logs and other local data.
    pub fn data_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load from the default location, then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path().ok_or(ConfigError::NoConfigDir)?;
        let config = Self::load_from(&path)?;
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse TOML text.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, text).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from an environment lookup.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_WAITLIST_URL) {
            self.waitlist.base_url = url;
        }
        if let Some(key) = lookup(ENV_WAITLIST_KEY) {
            self.waitlist.api_key = key;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.animation.particle_count, 50);
        assert_eq!(config.waitlist.table, "waitlist_emails");
        assert_eq!(config.waitlist.source, "landing_page");
        assert_eq!(config.splash.duration_ms, 1500);
        assert!(!config.waitlist.is_remote());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::parse(
            r#"
            [animation]
            particle_count = 120
            speed = "fast"

            [waitlist]
            base_url = "https://abc.supabase.co"
            "#,
        )
        .unwrap();
        assert_eq!(config.animation.particle_count, 120);
        assert_eq!(config.animation.speed, AnimationSpeed::Fast);
        assert_eq!(config.animation.units_per_pixel, 4.0);
        assert!(config.waitlist.is_remote());
        assert_eq!(config.waitlist.timeout_secs, 10);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.animation.grid_threshold = 64;
        config.waitlist.api_key = "anon".into();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_bad_value_is_an_error() {
        assert!(Config::parse("[animation]\nspeed = \"ludicrous\"").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default().with_env(|key| match key {
            ENV_WAITLIST_URL => Some("https://x.example".to_string()),
            ENV_WAITLIST_KEY => Some("secret".to_string()),
            _ => None,
        });
        assert_eq!(config.waitlist.base_url, "https://x.example");
        assert_eq!(config.waitlist.api_key, "secret");
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("xental-config-test-{}", std::process::id()));
        let path = dir.join("nested").join(CONFIG_FILE);
        let mut config = Config::default();
        config.splash.duration_ms = 250;
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}

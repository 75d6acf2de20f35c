//! TOML Configuration File Support
//!
//! Configuration for a simulation run, loaded from an optional TOML file at
//! `~/.config/chroma-life/config.toml` and from environment variables.
//!
//! # Configuration Priority
//!
//! Values are resolved with the following priority (highest first):
//! 1. Environment variables
//! 2. TOML configuration file
//! 3. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [grid]
//! width = 120
//! height = 28
//!
//! [timing]
//! interval_ms = 200
//!
//! [seed]
//! value = 1234
//!
//! [logging]
//! file = "/tmp/chroma-life.log"
//! ```
//!
//! # Environment Variables
//!
//! - `CHROMA_LIFE_CONFIG`: Path to the config file
//! - `CHROMA_LIFE_WIDTH` / `CHROMA_LIFE_HEIGHT`: Grid size in cells
//! - `CHROMA_LIFE_INTERVAL_MS`: Delay between generations
//! - `CHROMA_LIFE_SEED`: Fixed PRNG seed
//! - `CHROMA_LIFE_LOG`: Log file path

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 120;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 28;

/// Largest grid `validate` accepts, in cells
pub const MAX_CELLS: usize = 1 << 24;

/// Default delay between generations
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

/// Environment variable naming an alternate config file
pub const CONFIG_PATH_ENV: &str = "CHROMA_LIFE_CONFIG";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Grid section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridToml {
    /// Columns
    pub width: Option<usize>,
    /// Rows
    pub height: Option<usize>,
}

/// Timing section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingToml {
    /// Delay between generations in milliseconds
    pub interval_ms: Option<u64>,
}

/// Seed section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedToml {
    /// Fixed PRNG seed
    pub value: Option<u64>,
}

/// Logging section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingToml {
    /// File that receives log output
    pub file: Option<PathBuf>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeToml {
    /// Grid size
    pub grid: GridToml,
    /// Pacing
    pub timing: TimingToml,
    /// Random seed
    pub seed: SeedToml,
    /// Logging
    pub logging: LoggingToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved settings for one simulation run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Delay between generations
    pub interval: Duration,
    /// Fixed PRNG seed; `None` derives one from the clock
    pub seed: Option<u64>,
    /// Log file; `None` logs to stderr
    pub log_file: Option<PathBuf>,
    /// Config file that was loaded, if any
    pub config_file_path: Option<PathBuf>,
    /// Highest-priority layer that set a value
    pub source: ConfigSource,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            interval: DEFAULT_INTERVAL,
            seed: None,
            log_file: None,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl SimulationConfig {
    /// Reject settings the simulation cannot run with
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a zero-sized grid or one
    /// with more than [`MAX_CELLS`] cells.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ValidationError(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        match self.width.checked_mul(self.height) {
            Some(cells) if cells <= MAX_CELLS => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "grid of {}x{} exceeds {MAX_CELLS} cells",
                self.width, self.height
            ))),
        }
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/chroma-life/config.toml` or
/// `~/.config/chroma-life/config.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("chroma-life").join("config.toml"))
}

/// Load configuration from all sources with proper priority
///
/// `CHROMA_LIFE_CONFIG` replaces the default file location when set.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if the
/// resulting configuration is invalid. A missing file is not an error.
pub fn load_config() -> Result<SimulationConfig, ConfigError> {
    let path = std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .or_else(default_config_path);
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Load configuration from a specific path plus the process environment
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<SimulationConfig, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Load configuration using `env` to look up environment variables
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed, or
/// if the merged result fails [`SimulationConfig::validate`].
pub fn load_config_with<F>(path: Option<PathBuf>, env: F) -> Result<SimulationConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = SimulationConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: LifeToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, env);
    config.validate()?;

    Ok(config)
}

fn apply_toml_config(config: &mut SimulationConfig, toml: &LifeToml) {
    if let Some(width) = toml.grid.width {
        config.width = width;
    }
    if let Some(height) = toml.grid.height {
        config.height = height;
    }
    if let Some(ms) = toml.timing.interval_ms {
        config.interval = Duration::from_millis(ms);
    }
    if toml.seed.value.is_some() {
        config.seed = toml.seed.value;
    }
    if toml.logging.file.is_some() {
        config.log_file = toml.logging.file.clone();
    }
}

fn apply_env_config<F>(config: &mut SimulationConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(width) = parse_env(&env, "CHROMA_LIFE_WIDTH") {
        config.width = width;
        config.source = ConfigSource::Env;
    }
    if let Some(height) = parse_env(&env, "CHROMA_LIFE_HEIGHT") {
        config.height = height;
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = parse_env::<u64, _>(&env, "CHROMA_LIFE_INTERVAL_MS") {
        config.interval = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(seed) = parse_env(&env, "CHROMA_LIFE_SEED") {
        config.seed = Some(seed);
        config.source = ConfigSource::Env;
    }
    if let Some(file) = env("CHROMA_LIFE_LOG").filter(|v| !v.is_empty()) {
        config.log_file = Some(PathBuf::from(file));
        config.source = ConfigSource::Env;
    }
}

fn parse_env<T, F>(env: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable environment value");
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

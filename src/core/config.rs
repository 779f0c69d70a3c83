//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.guitar-trainer/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TrainerConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DataConfig {
    pub dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_LOG_FILE: &str = "logs/app.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.guitar-trainer/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".guitar-trainer").join("config.toml"))
}

/// Load config from `~/.guitar-trainer/config.toml`.
///
/// A missing file (or no home directory) yields `TrainerConfig::default()`.
/// If the file exists but is malformed, returns `ConfigError::Parse`.
/// Nothing is logged here: this runs before the logger exists.
pub fn load_config() -> Result<TrainerConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(TrainerConfig::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<TrainerConfig, ConfigError> {
    if !path.exists() {
        return Ok(TrainerConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Writes the commented-out default to `~/.guitar-trainer/config.toml` if
/// no config file exists yet. Call once logging is initialized.
pub fn ensure_default_config() {
    match config_path() {
        Some(path) => {
            ensure_default_config_at(&path);
        }
        None => warn!("Could not determine home directory, using default config"),
    }
}

/// Returns true if a default file was written.
pub fn ensure_default_config_at(path: &Path) -> bool {
    if path.exists() {
        debug!("Using config file at {}", path.display());
        return false;
    }
    info!("No config file found, generating default at {}", path.display());
    generate_default_config(path)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> bool {
    let default_content = r#"# Guitar Trainer Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [data]
# dir = "data"                   # Holds scales.json and lessons.json. Or set GUITAR_DATA_DIR

# [logging]
# level = "info"                 # "debug", "info", "warn", "error". Or set LOG_LEVEL
# file = "logs/app.log"          # Or set GUITAR_LOG_FILE
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return false;
        }
    }
    match fs::write(path, default_content) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to write default config: {}", e);
            false
        }
    }
}

/// Opens the log file for appending, creating it and its parent directory.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TrainerConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Data dir: CLI → env → config → default
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| std::env::var("GUITAR_DATA_DIR").ok().map(PathBuf::from))
        .or_else(|| config.data.dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("LOG_LEVEL").ok())
        .or_else(|| config.logging.level.clone())
        .map(|label| parse_level(&label))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → default
    let log_file = std::env::var("GUITAR_LOG_FILE")
        .ok()
        .or_else(|| config.logging.file.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        data_dir,
        log_level,
        log_file,
    }
}

/// Maps a level label to a filter. Unknown or empty labels fall back to info.
pub fn parse_level(label: &str) -> LevelFilter {
    match label.trim().to_ascii_lowercase().as_str() {
        "debug" => LevelFilter::Debug,
        "info" | "" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => DEFAULT_LOG_LEVEL,
    }
}

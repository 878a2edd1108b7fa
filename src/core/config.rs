//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.picklist/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Config is read before the logger exists (the logger's own level and file
//! come from here), so loading and resolution record their messages in a
//! `StartupLog` that the binary replays once logging is up.

use log::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::DEFAULT_WINDOW_SIZE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PicklistConfig {
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenuConfig {
    pub window_size: Option<usize>,
    pub truncate: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const MIN_WINDOW_SIZE: usize = 1;
pub const MAX_WINDOW_SIZE: usize = 25;
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "picklist.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub window_size: usize,
    pub truncate: bool,
    pub log_level: log::LevelFilter,
    pub log_file: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            truncate: true,
            log_level: DEFAULT_LOG_LEVEL,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
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
// Startup Log
// ============================================================================

/// Log records held back until the logger is initialized.
#[derive(Debug, Default)]
pub struct StartupLog {
    records: Vec<(Level, String)>,
}

impl StartupLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: Level, message: String) {
        self.records.push((level, message));
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message.as_str())
    }

    /// Emit every held record through the `log` facade, in order.
    pub fn replay(self) {
        for (level, message) in self.records {
            log::log!(level, "{}", message);
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.picklist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".picklist").join("config.toml"))
}

/// Load config from `~/.picklist/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PicklistConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(startup: &mut StartupLog) -> Result<PicklistConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            startup.push(
                Level::Warn,
                "Could not determine home directory, using default config".to_string(),
            );
            return Ok(PicklistConfig::default());
        }
    };

    if !path.exists() {
        startup.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(&path, startup);
        return Ok(PicklistConfig::default());
    }

    load_config_from(&path, startup)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(
    path: &Path,
    startup: &mut StartupLog,
) -> Result<PicklistConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PicklistConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    startup.push(Level::Info, format!("Loaded config from {}", path.display()));
    startup.push(Level::Debug, format!("Config: {:?}", config));
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, startup: &mut StartupLog) {
    let default_content = r#"# Picklist Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [menu]
# window_size = 5        # Options visible at once (1-25), or PICKLIST_WINDOW_SIZE
# truncate = true        # Clip long options to the terminal width

# [log]
# level = "info"         # "off", "error", "warn", "info", "debug", "trace", or PICKLIST_LOG_LEVEL
# file = "picklist.log"  # Relative to the working directory
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        startup.push(Level::Warn, format!("Failed to create config directory: {e}"));
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        startup.push(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_window_size` is from the CLI flag (None = not specified).
pub fn resolve(
    config: &PicklistConfig,
    cli_window_size: Option<usize>,
    startup: &mut StartupLog,
) -> ResolvedConfig {
    let env_window_size = std::env::var("PICKLIST_WINDOW_SIZE")
        .ok()
        .and_then(|v| match v.trim().parse::<usize>() {
            Ok(n) => Some(n),
            Err(_) => {
                startup.push(
                    Level::Warn,
                    format!("Ignoring non-numeric PICKLIST_WINDOW_SIZE: {v:?}"),
                );
                None
            }
        });

    // Window size: CLI → env → config → default
    let window_size = cli_window_size
        .or(env_window_size)
        .or(config.menu.window_size)
        .map(|size| validate_window_size(size, startup))
        .unwrap_or(DEFAULT_WINDOW_SIZE);

    // Log level: env → config → default
    let log_level = std::env::var("PICKLIST_LOG_LEVEL")
        .ok()
        .or_else(|| config.log.level.clone())
        .map(|s| parse_log_level(&s, startup))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        window_size,
        truncate: config.menu.truncate.unwrap_or(true),
        log_level,
        log_file: PathBuf::from(config.log.file.as_deref().unwrap_or(DEFAULT_LOG_FILE)),
    }
}

/// Falls back to the default for sizes outside `MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE`.
fn validate_window_size(size: usize, startup: &mut StartupLog) -> usize {
    if (MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&size) {
        size
    } else {
        startup.push(
            Level::Warn,
            format!(
                "window_size {size} outside {MIN_WINDOW_SIZE}..={MAX_WINDOW_SIZE}, using {DEFAULT_WINDOW_SIZE}"
            ),
        );
        DEFAULT_WINDOW_SIZE
    }
}

fn parse_log_level(level: &str, startup: &mut StartupLog) -> log::LevelFilter {
    match level.trim().parse::<log::LevelFilter>() {
        Ok(filter) => filter,
        Err(_) => {
            startup.push(
                Level::Warn,
                format!("Unknown log level {level:?}, using {DEFAULT_LOG_LEVEL}"),
            );
            DEFAULT_LOG_LEVEL
        }
    }
}

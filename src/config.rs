//! Runtime configuration.
//!
//! Three tiers, later wins:
//! 1. TOML file (`--config`, `FOLIO_CONFIG_PATH`, or the platform config dir)
//! 2. Environment variables (`FOLIO_LOG_LEVEL`, `FOLIO_LOG_DIR`)
//! 3. CLI arguments
//!
//! A missing default config file is not an error: defaults apply.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG_PATH";
pub const LOG_LEVEL_ENV: &str = "FOLIO_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "FOLIO_LOG_DIR";

const APP_DIR: &str = "folio";
const CONFIG_FILENAME: &str = "config.toml";

/// Narrowest breakpoint that still fits the hamburger and logo.
const MIN_BREAKPOINT: u16 = 20;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML syntax: {0}")]
    Parse(String),

    #[error("invalid configuration value: {0}")]
    InvalidValue(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Viewer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal widths below this many columns use the mobile layout.
    pub mobile_breakpoint: u16,
    /// Rows scrolled per line-scroll key or wheel notch.
    pub scroll_step: u16,
    /// Duration of smooth scrolling to an anchor. Zero jumps.
    pub smooth_scroll_ms: u64,
    /// Enter/exit transitions and scroll reveal.
    pub animations: bool,
    /// trace|debug|info|warn|error
    pub log_level: String,
    /// Directory for rotating log files.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 100,
            scroll_step: 3,
            smooth_scroll_ms: 400,
            animations: true,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

/// Default log level for the current build mode.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Overrides supplied on the command line.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub mobile_breakpoint: Option<u16>,
    pub no_animations: bool,
    pub log_level: Option<String>,
}

impl Config {
    /// Directory for log files: configured, or the platform data dir.
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(env::temp_dir)
                .join(APP_DIR)
                .join("logs")
        })
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Default config location: `<config dir>/folio/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load configuration, applying environment and CLI overrides.
///
/// An explicit path (argument or `FOLIO_CONFIG_PATH`) must exist; the
/// default location may be absent.
pub fn load_config(explicit: Option<&Path>, cli: &CliOverrides) -> ConfigResult<Config> {
    let env_path = env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);

    let mut config = match explicit.map(Path::to_path_buf).or(env_path) {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path));
            }
            parse_config(&fs::read_to_string(&path)?)?
        }
        None => match default_config_path() {
            Some(path) if path.exists() => parse_config(&fs::read_to_string(&path)?)?,
            _ => Config::default(),
        },
    };

    apply_environment_overrides(&mut config, |key| env::var(key).ok());
    apply_cli_overrides(&mut config, cli);
    validate(&config)?;
    Ok(config)
}

/// Parse a TOML document. Missing keys take their defaults.
pub fn parse_config(raw: &str) -> ConfigResult<Config> {
    Ok(toml::from_str(raw)?)
}

/// Apply environment overrides read through `lookup`.
pub fn apply_environment_overrides(
    config: &mut Config,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(level) = lookup(LOG_LEVEL_ENV) {
        config.log_level = level;
    }
    if let Some(dir) = lookup(LOG_DIR_ENV) {
        config.log_dir = Some(PathBuf::from(dir));
    }
}

pub fn apply_cli_overrides(config: &mut Config, cli: &CliOverrides) {
    if let Some(breakpoint) = cli.mobile_breakpoint {
        config.mobile_breakpoint = breakpoint;
    }
    if cli.no_animations {
        config.animations = false;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
}

pub fn validate(config: &Config) -> ConfigResult<()> {
    if config.scroll_step == 0 {
        return Err(ConfigError::InvalidValue(
            "scroll_step must be at least 1".to_string(),
        ));
    }
    if config.mobile_breakpoint < MIN_BREAKPOINT {
        return Err(ConfigError::InvalidValue(format!(
            "mobile_breakpoint must be at least {MIN_BREAKPOINT}, got {}",
            config.mobile_breakpoint
        )));
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

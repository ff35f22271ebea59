//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cuptower/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Tower dimensions are validated here, so everything downstream can assume
//! they are positive.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CupTowerConfig {
    #[serde(default)]
    pub tower: TowerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TowerConfig {
    pub width: Option<i64>,
    pub max_height: Option<i64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub start_visible: Option<bool>,
    pub show_ruler: Option<bool>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub width: Option<i64>,
    pub max_height: Option<i64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_WIDTH: i64 = 10;
pub const DEFAULT_MAX_HEIGHT: i64 = 50;

pub const ENV_WIDTH: &str = "CUPTOWER_WIDTH";
pub const ENV_MAX_HEIGHT: &str = "CUPTOWER_MAX_HEIGHT";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub width: i64,
    pub max_height: i64,
    pub start_visible: bool,
    pub show_ruler: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    /// A tower dimension that is not a positive integer.
    InvalidDimension { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::InvalidDimension { name, value } => {
                write!(f, "{name} must be a positive integer (got {value:?})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.cuptower/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cuptower").join("config.toml"))
}

/// Load config from `~/.cuptower/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CupTowerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CupTowerConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CupTowerConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CupTowerConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<CupTowerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CupTowerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# cuptower configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [tower]
# width = 10          # or CUPTOWER_WIDTH, or --width
# max_height = 50     # or CUPTOWER_MAX_HEIGHT, or --max-height

# [display]
# start_visible = true
# show_ruler = true
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config: defaults → config file → env vars → CLI.
pub fn resolve(config: &CupTowerConfig, cli: CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env`.
pub fn resolve_with_env(
    config: &CupTowerConfig,
    cli: CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    let width = resolve_dimension(
        "width",
        cli.width,
        env(ENV_WIDTH),
        config.tower.width,
        DEFAULT_WIDTH,
    )?;
    let max_height = resolve_dimension(
        "max_height",
        cli.max_height,
        env(ENV_MAX_HEIGHT),
        config.tower.max_height,
        DEFAULT_MAX_HEIGHT,
    )?;

    Ok(ResolvedConfig {
        width,
        max_height,
        start_visible: config.display.start_visible.unwrap_or(true),
        show_ruler: config.display.show_ruler.unwrap_or(true),
    })
}

/// CLI → env → file → default, then checked for positivity.
fn resolve_dimension(
    name: &'static str,
    cli: Option<i64>,
    env: Option<String>,
    file: Option<i64>,
    default: i64,
) -> Result<i64, ConfigError> {
    let value = match (cli, env) {
        (Some(v), _) => v,
        (None, Some(raw)) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidDimension { name, value: raw.clone() })?,
        (None, None) => file.unwrap_or(default),
    };
    if value <= 0 {
        return Err(ConfigError::InvalidDimension { name, value: value.to_string() });
    }
    Ok(value)
}

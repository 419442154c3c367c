//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pokedex/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::list::{DEFAULT_PAGE_SIZE, ListOptions};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PokedexConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub page_size: Option<u32>,
    pub artwork_base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListConfig {
    pub guard_in_flight: Option<bool>,
    pub dedupe: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub artwork_base_url: String,
    pub list: ListOptions,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub page_size: Option<u32>,
    /// Turns off both list guards.
    pub allow_duplicate_pages: bool,
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

/// Returns the path to `~/.pokedex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pokedex").join("config.toml"))
}

/// Load config from `~/.pokedex/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PokedexConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PokedexConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PokedexConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Result<PokedexConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(PokedexConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PokedexConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Pokedex Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://pokeapi.co/api/v2"     # Or set POKEDEX_BASE_URL
# page_size = 40                             # Or set POKEDEX_PAGE_SIZE
# artwork_base_url = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork"

# [list]
# guard_in_flight = true   # Request each page once; hold the cursor while a page loads
# dedupe = true            # Skip summaries whose id is already listed
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PokedexConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("POKEDEX_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Page size: CLI → env → config → default. A zero at any layer falls through.
    let nonzero = |n: &u32| *n > 0;
    let page_size = cli
        .page_size
        .filter(nonzero)
        .or_else(|| {
            std::env::var("POKEDEX_PAGE_SIZE")
                .ok()
                .and_then(|s| s.parse::<u32>().ok())
                .filter(nonzero)
        })
        .or(config.api.page_size.filter(nonzero))
        .unwrap_or(DEFAULT_PAGE_SIZE);

    let artwork_base_url = config
        .api
        .artwork_base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_ARTWORK_BASE_URL.to_string());

    let defaults = ListOptions::default();
    let list = if cli.allow_duplicate_pages {
        ListOptions::unguarded(page_size)
    } else {
        ListOptions {
            page_size,
            guard_in_flight: config.list.guard_in_flight.unwrap_or(defaults.guard_in_flight),
            dedupe: config.list.dedupe.unwrap_or(defaults.dedupe),
        }
    };

    ResolvedConfig {
        base_url,
        artwork_base_url,
        list,
    }
}

//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Theme;
use crate::core::content;
use crate::core::section::SectionId;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<Theme>,
    pub start_section: Option<String>,
    pub notifications: Option<bool>,
    pub greeting: Option<bool>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub owner: Option<String>,
    pub phrases: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_START_SECTION: SectionId = SectionId::Hero;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub start_section: String,
    pub notifications: bool,
    pub greeting: bool,
    pub log_level: LevelFilter,
    pub owner: String,
    pub phrases: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            start_section: DEFAULT_START_SECTION.as_str().to_string(),
            notifications: true,
            greeting: true,
            log_level: DEFAULT_LOG_LEVEL,
            owner: content::DEFAULT_OWNER.to_string(),
            phrases: default_phrases(),
        }
    }
}

fn default_phrases() -> Vec<String> {
    content::PHRASES.iter().map(|p| p.to_string()).collect()
}

/// Flags given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub theme: Option<Theme>,
    pub no_notifications: bool,
    pub section: Option<String>,
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

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FolioConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG: &str = r#"# Folio Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "dark"                     # "dark" or "light" (env: FOLIO_THEME)
# start_section = "hero"             # hero, about, skills, projects, certs, contact
# notifications = true               # scripted SOC notification feed
# greeting = true                    # time-of-day welcome toast
# log_level = "debug"                # off, error, warn, info, debug, trace (env: FOLIO_LOG)

# [profile]
# owner = "Rahul Maurya"
# phrases = [
#     "SOC Analyst & Threat Hunter",
#     "Incident Response Specialist",
# ]
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FolioConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment supplied by `env`.
pub fn resolve_with_env(
    config: &FolioConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    // Theme: CLI → env → config → default
    let theme = cli
        .theme
        .or_else(|| env("FOLIO_THEME").and_then(|s| parse_or_warn(&s, "FOLIO_THEME")))
        .or(config.general.theme)
        .unwrap_or(defaults.theme);

    // Start section: CLI → config → default, unknown ids fall back
    let start_section = cli
        .section
        .clone()
        .or_else(|| config.general.start_section.clone())
        .and_then(|id| match id.parse::<SectionId>() {
            Ok(section) => Some(section.as_str().to_string()),
            Err(e) => {
                warn!("Ignoring start section: {e}");
                None
            }
        })
        .unwrap_or(defaults.start_section);

    // Log level: env → config → default
    let log_level = env("FOLIO_LOG")
        .and_then(|s| parse_or_warn(&s, "FOLIO_LOG"))
        .or_else(|| {
            config
                .general
                .log_level
                .as_deref()
                .and_then(|s| parse_or_warn(s, "log_level"))
        })
        .unwrap_or(defaults.log_level);

    let notifications =
        !cli.no_notifications && config.general.notifications.unwrap_or(defaults.notifications);

    let phrases = match &config.profile.phrases {
        Some(phrases) if !phrases.is_empty() => phrases.clone(),
        Some(_) => {
            warn!("Empty phrase list in config, using defaults");
            defaults.phrases
        }
        None => defaults.phrases,
    };

    ResolvedConfig {
        theme,
        start_section,
        notifications,
        greeting: config.general.greeting.unwrap_or(defaults.greeting),
        log_level,
        owner: config.profile.owner.clone().unwrap_or(defaults.owner),
        phrases,
    }
}

fn parse_or_warn<T: std::str::FromStr>(value: &str, source: &str) -> Option<T> {
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring invalid {} value: {:?}", source, value);
            None
        }
    }
}

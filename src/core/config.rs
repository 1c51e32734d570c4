//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.eida/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EidaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// "offline" or "remote".
    pub provider: Option<String>,
    pub dark_mode: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RemoteConfig {
    pub endpoint: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PROVIDER: &str = "remote";
pub const DEFAULT_ENDPOINT: &str =
    "https://hmgfjd373a.execute-api.us-east-1.amazonaws.com/chat";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub provider: String,
    pub endpoint: String,
    pub dark_mode: bool,
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

/// Returns the path to `~/.eida/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".eida").join("config.toml"))
}

/// Load config from `~/.eida/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `EidaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<EidaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(EidaConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(EidaConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: EidaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Eida Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# provider = "remote"                # "remote" or "offline"
# dark_mode = false

# [remote]
# endpoint = "https://hmgfjd373a.execute-api.us-east-1.amazonaws.com/chat"
#                                    # Or set EIDA_CHAT_ENDPOINT env var
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
///
/// `cli_provider` and `cli_endpoint` come from CLI flags (None = not
/// specified); `cli_dark` is a presence flag, so it only overrides upward.
pub fn resolve(
    config: &EidaConfig,
    cli_provider: Option<&str>,
    cli_endpoint: Option<&str>,
    cli_dark: bool,
) -> ResolvedConfig {
    // Provider: CLI → env → config → default
    let provider = cli_provider
        .map(|s| s.to_string())
        .or_else(|| std::env::var("EIDA_PROVIDER").ok())
        .or_else(|| config.general.provider.clone())
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    // Endpoint: CLI → env → config → default
    let endpoint = cli_endpoint
        .map(|s| s.to_string())
        .or_else(|| std::env::var("EIDA_CHAT_ENDPOINT").ok())
        .or_else(|| config.remote.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Dark mode: the --dark flag only ever turns it on
    let dark_mode = cli_dark || config.general.dark_mode.unwrap_or(false);

    ResolvedConfig {
        provider,
        endpoint,
        dark_mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse_config(provider: Option<&str>, endpoint: Option<&str>) -> EidaConfig {
        EidaConfig {
            general: GeneralConfig {
                provider: provider.map(String::from),
                dark_mode: None,
            },
            remote: RemoteConfig {
                endpoint: endpoint.map(String::from),
            },
        }
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        let resolved = resolve(&EidaConfig::default(), None, None, false);
        assert_eq!(resolved.provider, DEFAULT_PROVIDER);
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert!(!resolved.dark_mode);
    }

    #[test]
    fn config_file_overrides_defaults() {
        let config = sparse_config(Some("offline"), Some("http://localhost:9000/chat"));
        let resolved = resolve(&config, None, None, false);
        assert_eq!(resolved.provider, "offline");
        assert_eq!(resolved.endpoint, "http://localhost:9000/chat");
    }

    #[test]
    fn cli_flags_win_over_config_file() {
        let config = sparse_config(Some("offline"), Some("http://localhost:9000/chat"));
        let resolved = resolve(&config, Some("remote"), Some("http://example.test/chat"), true);
        assert_eq!(resolved.provider, "remote");
        assert_eq!(resolved.endpoint, "http://example.test/chat");
        assert!(resolved.dark_mode);
    }

    #[test]
    fn dark_flag_does_not_override_config_downward() {
        let config = EidaConfig {
            general: GeneralConfig {
                provider: None,
                dark_mode: Some(true),
            },
            remote: RemoteConfig::default(),
        };
        let resolved = resolve(&config, None, None, false);
        assert!(resolved.dark_mode);
    }

    #[test]
    fn sparse_toml_parses() {
        let config: EidaConfig = toml::from_str("[general]\nprovider = \"offline\"\n").unwrap();
        assert_eq!(config.general.provider.as_deref(), Some("offline"));
        assert!(config.remote.endpoint.is_none());
    }
}

// Configuration file handling

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub messages: MessageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessageConfig {
    /// Append a character diff to deep-equality failures
    #[serde(default)]
    pub diff: bool,

    /// Colour the appended diff
    #[serde(default)]
    pub color: bool,

    /// Render values with `{:#?}` instead of `{:?}`
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit a tracing event for every recorded failure
    #[serde(default = "default_log_failures")]
    pub log_failures: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_failures: default_log_failures(),
        }
    }
}

// Default values
pub const ENV_SOFTASSERT_CONFIG: &str = "SOFTASSERT_CONFIG";
pub const CONFIG_FILE_NAME: &str = ".softassertrc.toml";

fn default_log_failures() -> bool {
    true
}

static GLOBAL: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Process-wide configuration.
    ///
    /// Unless [`Config::install`] ran first, the first call (normally the
    /// first failing assertion) reads the config files listed in
    /// [`Config::load`]. A stray `.softassertrc.toml` in the working directory
    /// therefore changes message text; install a config to rule that out.
    pub fn global() -> &'static Config {
        GLOBAL.get_or_init(|| Self::load().unwrap_or_default())
    }

    /// Pin the process-wide configuration without touching the filesystem.
    ///
    /// Returns the config back if one is already in place.
    pub fn install(self) -> Result<(), Config> {
        GLOBAL.set(self)
    }

    /// Load configuration from default locations
    pub fn load() -> Option<Self> {
        // Check locations in order:
        // 1. $SOFTASSERT_CONFIG
        // 2. .softassertrc.toml (current directory)
        // 3. ~/.softassertrc.toml (home directory)
        let mut paths: Vec<PathBuf> = Vec::new();
        if let Some(explicit) = std::env::var_os(ENV_SOFTASSERT_CONFIG) {
            paths.push(PathBuf::from(explicit));
        }
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(CONFIG_FILE_NAME));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(CONFIG_FILE_NAME));
        }

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => {
                    tracing::debug!("Loaded softassert config from {}", path.display());
                    return Some(config);
                }
                Err(e) => tracing::warn!("Ignoring softassert config: {}", e),
            }
        }

        None
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Generate configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[messages]
diff = true
color = false
pretty = true

[logging]
log_failures = false
"#;

        let config = Config::parse(toml).expect("Failed to parse config");
        assert!(config.messages.diff);
        assert!(!config.messages.color);
        assert!(config.messages.pretty);
        assert!(!config.logging.log_failures);
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = Config::parse("[messages]\ndiff = true\n").expect("Failed to parse config");
        assert!(config.messages.diff);
        assert!(!config.messages.pretty);
        assert!(config.logging.log_failures);
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = Config::parse("[messages]\ndiff = \"yes\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_to_toml_roundtrips_through_parse() {
        let mut config = Config::default();
        config.messages.color = true;

        let parsed = Config::parse(&config.to_toml()).expect("Failed to parse generated config");
        assert!(parsed.messages.color);
        assert!(parsed.logging.log_failures);
    }
}

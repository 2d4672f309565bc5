//! Daemon configuration.
//!
//! Optional toml file (`~/.config/ramyeon/config.toml`, overridable with
//! `RAMYEOND_CONFIG`) with environment overrides for the bind address
//! and the API key. Every field defaults, so no file is required.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

const CONFIG_DIR: &str = "ramyeon";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSettings {
    /// Model invoked on open-intent turns.
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; env GEMINI_API_KEY / GOOGLE_API_KEY wins over the file.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Completion call timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default)]
    pub gemini: GeminiSettings,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8787".to_string()
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            gemini: GeminiSettings::default(),
        }
    }
}

impl DaemonConfig {
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("RAMYEOND_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from the config file, then apply environment overrides.
    /// A missing file means defaults; a broken file is warned about and
    /// ignored rather than refusing to start.
    pub fn load() -> Self {
        let mut config: Self = Self::config_path()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|text| match toml::from_str(&text) {
                Ok(config) => Some(config),
                Err(e) => {
                    warn!("ignoring unreadable config file: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        if let Ok(addr) = std::env::var("RAMYEOND_BIND") {
            config.bind_addr = addr;
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            config.gemini.api_key = Some(key);
        } else if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
            config.gemini.api_key = Some(key);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let config = DaemonConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:8787");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.timeout_secs, 20);
        assert!(config.gemini.api_key.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: DaemonConfig = toml::from_str("bind_addr = \"0.0.0.0:9000\"").unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
    }
}

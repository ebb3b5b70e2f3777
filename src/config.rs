use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Bip39Error, Result};
use crate::mnemonic::{WordsCount, WORDS_NUM_24};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MnemonicConfig {
    #[serde(default)]
    pub cli: CliConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CliConfig {
    #[serde(default = "default_words_count")]
    pub default_words_count: usize,
    /// Wordlist file; the bundled English list when unset.
    #[serde(default)]
    pub wordlist_path: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_words_count() -> usize {
    WORDS_NUM_24
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_words_count: default_words_count(),
            wordlist_path: None,
            log_level: default_log_level(),
        }
    }
}

impl Default for MnemonicConfig {
    fn default() -> Self {
        Self {
            cli: CliConfig::default(),
        }
    }
}

impl MnemonicConfig {
    pub fn from_toml(s: &str) -> Result<Self> {
        let config: MnemonicConfig =
            toml::from_str(s).map_err(|e| Bip39Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        WordsCount::from_count(self.cli.default_words_count)
            .map_err(|e| Bip39Error::Config(format!("default_words_count: {}", e)))?;
        Ok(())
    }

    pub fn load_or_default(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            match std::fs::read_to_string(path) {
                Ok(s) => match Self::from_toml(&s) {
                    Ok(c) => {
                        info!("Config loaded from {}", path);
                        c
                    }
                    Err(e) => {
                        warn!("Error parsing config: {}. Using defaults.", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    warn!("Error reading config: {}. Using defaults.", e);
                    Self::default()
                }
            }
        } else {
            info!("Config file not found at '{}'. Using defaults.", path);
            Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MnemonicConfig::default();
        assert_eq!(config.cli.default_words_count, 24);
        assert!(config.cli.wordlist_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = MnemonicConfig::from_toml("[cli]\ndefault_words_count = 12\n").unwrap();
        assert_eq!(config.cli.default_words_count, 12);
        assert_eq!(config.cli.log_level, "warn");

        let empty = MnemonicConfig::from_toml("").unwrap();
        assert_eq!(empty, MnemonicConfig::default());
    }

    #[test]
    fn test_rejects_bad_words_count() {
        let err = MnemonicConfig::from_toml("[cli]\ndefault_words_count = 13\n").unwrap_err();
        assert!(matches!(err, Bip39Error::Config(_)));
    }

    #[test]
    fn test_roundtrip_toml() {
        let mut config = MnemonicConfig::default();
        config.cli.wordlist_path = Some("words.txt".to_string());
        let s = toml::to_string_pretty(&config).unwrap();
        assert_eq!(MnemonicConfig::from_toml(&s).unwrap(), config);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = MnemonicConfig::load_or_default("/nonexistent/mnemonic.toml");
        assert_eq!(config, MnemonicConfig::default());
    }
}

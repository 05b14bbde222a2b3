use std::{fs, path::{Path, PathBuf}};

use anyhow::Context;
use serde::{Serialize, Deserialize};

use crate::backend::{DEFAULT_SECRET_FILE, DEFAULT_STATE_FILE};
use crate::core::session::AuthGate;
use crate::core::CurrencyFormat;

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub state_file: PathBuf,
    pub secret_file: PathBuf
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            secret_file: PathBuf::from(DEFAULT_SECRET_FILE)
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub symbol: String
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        CurrencyConfig { symbol: "$".to_string() }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub max_pin_attempts: u32
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { max_pin_attempts: AuthGate::DEFAULT_MAX_ATTEMPTS }
    }
}

/// Application configuration, read from a TOML file. Every field has a
/// default, so a partial file or none at all is fine.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub currency: CurrencyConfig,
    pub session: SessionConfig
}

impl AppConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat::new(&self.currency.symbol)
    }
}

//! 遊戲進程設定（TOML）
//!
//! 遊戲規則常數固定在 `constants.rs`，這裡只放開局資源與時序。

use crate::alias::Amount;
use crate::constants::{INITIAL_ELIXIR, INITIAL_GOLD, ORACLE_TIMEOUT_MS, TICK_INTERVAL_MS};
use crate::error::{LoadError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    pub initial_gold: Amount,
    pub initial_elixir: Amount,
    pub tick_interval_ms: u64,
    pub oracle_timeout_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_gold: INITIAL_GOLD,
            initial_elixir: INITIAL_ELIXIR,
            tick_interval_ms: TICK_INTERVAL_MS,
            oracle_timeout_ms: ORACLE_TIMEOUT_MS,
        }
    }
}

impl SessionConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content).map_err(|e| LoadError::DeserializeError {
            format: "session.toml".to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::ReadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        let content = toml::to_string_pretty(self).map_err(|e| LoadError::SerializeError {
            format: "session.toml".to_string(),
            reason: e.to_string(),
        })?;
        Ok(content)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn oracle_timeout(&self) -> Duration {
        Duration::from_millis(self.oracle_timeout_ms)
    }
}

//! Конфигурация для sqlgate
//!
//! Настройки относятся к внешнему слою (CLI и представление результатов);
//! ядро анализатора не настраивается и не читает конфигурацию.

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Конфигурация анализатора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Уровень логирования
    pub log_level: String,
    /// Выводить JSON с отступами
    pub pretty_json: bool,
    /// Максимальная длина запроса в символах (0 - без ограничения)
    pub max_query_length: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            pretty_json: false,
            max_query_length: 10_000,
        }
    }
}

impl AnalyzerConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|error| Error::configuration(error.to_string()))
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|error| Error::configuration(error.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.pretty_json);
        assert_eq!(config.max_query_length, 10_000);
    }

    #[test]
    fn test_config_roundtrip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sqlgate.toml");

        let mut config = AnalyzerConfig::default();
        config.log_level = "debug".to_string();
        config.pretty_json = true;
        config.save(&path)?;

        let loaded = AnalyzerConfig::load(&path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_config_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "log_level = ").unwrap();

        let result = AnalyzerConfig::load(&path);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}

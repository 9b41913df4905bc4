use crate::api::DEFAULT_LOW_STOCK_THRESHOLD;
use crate::error::{EstoqueError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "estoque.json";

/// Configuration for estoque, stored as `config.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EstoqueConfig {
    /// Inventory file; relative paths are resolved against the data directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Products with fewer units than this are reported as low stock
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u64,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_low_stock_threshold() -> u64 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for EstoqueConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

/// Keys accepted by [`EstoqueConfig::get`] and [`EstoqueConfig::set`].
pub const CONFIG_KEYS: [&str; 2] = ["data-file", "low-stock-threshold"];

impl EstoqueConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(EstoqueError::Io)?;
        let config: EstoqueConfig =
            serde_json::from_str(&content).map_err(EstoqueError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(EstoqueError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(EstoqueError::Serialization)?;
        fs::write(config_path, content).map_err(EstoqueError::Io)?;
        Ok(())
    }

    /// The inventory file, resolved against `data_dir` when relative.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            data_dir.join(&self.data_file)
        }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data-file" => Ok(self.data_file.display().to_string()),
            "low-stock-threshold" => Ok(self.low_stock_threshold.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err(EstoqueError::Config("data-file cannot be empty".to_string()));
                }
                self.data_file = PathBuf::from(value.trim());
            }
            "low-stock-threshold" => {
                self.low_stock_threshold = value.trim().parse().map_err(|_| {
                    EstoqueError::Config(format!(
                        "low-stock-threshold must be a non-negative integer, got '{}'",
                        value
                    ))
                })?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> EstoqueError {
    EstoqueError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = EstoqueConfig::default();
        assert_eq!(config.data_file, PathBuf::from("estoque.json"));
        assert_eq!(config.low_stock_threshold, 10);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = EstoqueConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, EstoqueConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = EstoqueConfig::default();
        config.set("low-stock-threshold", "3").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = EstoqueConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.low_stock_threshold, 3);
        assert_eq!(loaded.data_file, PathBuf::from("estoque.json"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"low_stock_threshold": 2}"#).unwrap();

        let config = EstoqueConfig::load(dir.path()).unwrap();
        assert_eq!(config.low_stock_threshold, 2);
        assert_eq!(config.data_file, PathBuf::from("estoque.json"));
    }

    #[test]
    fn test_data_path_resolution() {
        let dir = TempDir::new().unwrap();
        let config = EstoqueConfig::default();
        assert_eq!(config.data_path(dir.path()), dir.path().join("estoque.json"));

        let absolute = dir.path().join("elsewhere.json");
        let config = EstoqueConfig {
            data_file: absolute.clone(),
            ..EstoqueConfig::default()
        };
        assert_eq!(config.data_path(Path::new("/ignored")), absolute);
    }

    #[test]
    fn test_get_and_set_keys() {
        let mut config = EstoqueConfig::default();
        config.set("data-file", "loja.json").unwrap();
        assert_eq!(config.get("data-file").unwrap(), "loja.json");
        assert_eq!(config.get("low-stock-threshold").unwrap(), "10");

        assert!(config.set("low-stock-threshold", "-1").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert!(config.get("colour").is_err());
    }
}

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::model::emission::{EmissionFactors, FactorOverrides};

pub const DATA_DIR_ENV: &str = "ECOSTEPS_DATA_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_DIR_NAME: &str = ".ecosteps";
/// kg CO2e per day shown as the goal on the dashboard.
pub const DEFAULT_DAILY_TARGET_KG: f64 = 12.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub factors: EmissionFactors,
    pub daily_target_kg: f64,
}

#[derive(Deserialize, Debug, Default)]
struct ConfigFile {
    #[serde(default)]
    factors: FactorOverrides,
    daily_target_kg: Option<f64>,
}

/// `$ECOSTEPS_DATA_DIR` if set, otherwise `~/.ecosteps`.
pub fn default_data_dir() -> Result<PathBuf> {
    resolve_data_dir(None, env::var(DATA_DIR_ENV).ok())
}

fn resolve_data_dir(explicit: Option<PathBuf>, from_env: Option<String>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = from_env.filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DEFAULT_DIR_NAME))
}

impl AppConfig {
    /// Resolves the data directory and reads `config.toml` from it when present.
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir, env::var(DATA_DIR_ENV).ok())?;
        let config_path = data_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using default factors");
            return Ok(Self {
                data_dir,
                factors: EmissionFactors::default(),
                daily_target_kg: DEFAULT_DAILY_TARGET_KG,
            });
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {:?}", config_path))?;
        Self::from_toml_str(data_dir, &contents)
            .with_context(|| format!("Failed to parse config file {:?}", config_path))
    }

    pub fn from_toml_str(data_dir: impl AsRef<Path>, contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        let daily_target_kg = match file.daily_target_kg {
            Some(kg) if kg.is_finite() && kg > 0.0 => kg,
            Some(kg) => {
                warn!(daily_target_kg = kg, "ignoring invalid daily target");
                DEFAULT_DAILY_TARGET_KG
            }
            None => DEFAULT_DAILY_TARGET_KG,
        };
        Ok(Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            factors: EmissionFactors::default().with_overrides(file.factors),
            daily_target_kg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::activity::Category;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/eco")), Some("/srv/eco".to_string())).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/eco"));
    }

    #[test]
    fn test_env_dir_used_when_not_blank() {
        let dir = resolve_data_dir(None, Some("/srv/eco".to_string())).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/eco"));

        if let Some(home) = dirs::home_dir() {
            let dir = resolve_data_dir(None, Some("  ".to_string())).unwrap();
            assert_eq!(dir, home.join(DEFAULT_DIR_NAME));
        }
    }

    #[test]
    fn test_factor_overrides_from_toml() {
        let config = AppConfig::from_toml_str(
            "/tmp/eco",
            r#"
            [factors.transport]
            car = 0.18
            train = 0.035

            [factors.food]
            vegan = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.factors.factor(Category::Transport, "car"), 0.18);
        assert_eq!(config.factors.factor(Category::Transport, "train"), 0.035);
        assert_eq!(config.factors.factor(Category::Food, "vegan"), 2.0);
        assert_eq!(config.factors.factor(Category::Electricity, "high"), 18.0);
    }

    #[test]
    fn test_empty_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str("/tmp/eco", "").unwrap();
        assert_eq!(config.factors, EmissionFactors::default());
        assert_eq!(config.daily_target_kg, DEFAULT_DAILY_TARGET_KG);
    }

    #[test]
    fn test_daily_target_from_toml() {
        let config = AppConfig::from_toml_str("/tmp/eco", "daily_target_kg = 9.5").unwrap();
        assert_eq!(config.daily_target_kg, 9.5);

        let config = AppConfig::from_toml_str("/tmp/eco", "daily_target_kg = -2.0").unwrap();
        assert_eq!(config.daily_target_kg, DEFAULT_DAILY_TARGET_KG);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(AppConfig::from_toml_str("/tmp/eco", "[factors.transport]\ncar = \"fast\"").is_err());
    }

    #[test]
    fn test_load_without_config_file() {
        let dir = std::env::temp_dir().join(format!("ecosteps-config-{}", uuid::Uuid::new_v4()));
        let config = AppConfig::load(Some(dir.clone())).unwrap();
        assert_eq!(config.data_dir, dir);
        assert_eq!(config.factors, EmissionFactors::default());
    }
}

use crate::core::store::{DepthPolicy, StoreOptions};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod migrate;

/// Keys every configuration file is expected to carry.
pub const KNOWN_KEYS: &[&str] = &[
    "database",
    "depth_policy",
    "large_interval_threshold",
    "autosave_interval_secs",
    "separator_char",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub depth_policy: DepthPolicy,
    #[serde(default = "default_large_interval")]
    pub large_interval_threshold: f64,
    #[serde(default = "default_autosave_secs")]
    pub autosave_interval_secs: u64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_large_interval() -> f64 {
    5.0
}
fn default_autosave_secs() -> u64 {
    3
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            depth_policy: DepthPolicy::default(),
            large_interval_threshold: default_large_interval(),
            autosave_interval_secs: default_autosave_secs(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.drilllog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".drilllog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("drilllog.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("drilllog.sqlite")
    }

    /// Load configuration from the standard file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if !(self.large_interval_threshold.is_finite() && self.large_interval_threshold >= 0.0) {
            return Err(AppError::Config(format!(
                "large_interval_threshold must be a non-negative number (got {})",
                self.large_interval_threshold
            )));
        }
        if self.autosave_interval_secs == 0 {
            return Err(AppError::Config(
                "autosave_interval_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Options handed to the interval store.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            depth_policy: self.depth_policy,
            large_interval_threshold: self.large_interval_threshold,
        }
    }

    pub fn autosave_interval(&self) -> Duration {
        Duration::from_secs(self.autosave_interval_secs)
    }

    /// Return the keys missing from the configuration file on disk.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
        let content = fs::read_to_string(path)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config(format!("{} is not a YAML mapping", path.display())))?;

        Ok(KNOWN_KEYS
            .iter()
            .filter(|k| !map.contains_key(serde_yaml::Value::String(k.to_string())))
            .map(|k| k.to_string())
            .collect())
    }

    /// Initialize configuration directory, config file and database file.
    /// Returns the resolved database path.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };

            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}

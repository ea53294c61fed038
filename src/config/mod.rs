use crate::core::habits::MAX_HISTORY_DAYS;
use crate::core::weekly::MAX_WEEKS;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Keys every configuration file is expected to carry.
const KNOWN_KEYS: &[&str] = &[
    "database",
    "default_weeks",
    "history_days",
    "log_retention_days",
    "label_format",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Number of weekly buckets shown by `stats`.
    #[serde(default = "default_weeks")]
    pub default_weeks: u32,
    /// Number of days shown by `history`.
    #[serde(default = "default_history_days")]
    pub history_days: u32,
    /// Activity log rows older than this are removed by `log --clear`.
    #[serde(default = "default_log_retention")]
    pub log_retention_days: u32,
    /// chrono format used for weekly bucket labels.
    #[serde(default = "default_label_format")]
    pub label_format: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_weeks() -> u32 {
    4
}
fn default_history_days() -> u32 {
    30
}
fn default_log_retention() -> u32 {
    30
}
fn default_label_format() -> String {
    crate::core::weekly::DEFAULT_LABEL_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_weeks: default_weeks(),
            history_days: default_history_days(),
            log_retention_days: default_log_retention(),
            label_format: default_label_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rhabit`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rhabit")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rhabit.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rhabit.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let mut cfg: Config = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?
        } else {
            Config::default()
        };

        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.default_weeks == 0 {
            return Err(AppError::Config("default_weeks must be at least 1".into()));
        }
        if self.default_weeks > MAX_WEEKS {
            return Err(AppError::Config(format!(
                "default_weeks must be at most {MAX_WEEKS}"
            )));
        }
        if self.history_days == 0 {
            return Err(AppError::Config("history_days must be at least 1".into()));
        }
        if self.history_days > MAX_HISTORY_DAYS {
            return Err(AppError::Config(format!(
                "history_days must be at most {MAX_HISTORY_DAYS}"
            )));
        }
        if self.label_format.trim().is_empty() {
            return Err(AppError::Config("label_format cannot be empty".into()));
        }
        Ok(())
    }

    /// Keys missing from the YAML file at `path` (they fall back to defaults).
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let yaml: Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration root must be a mapping".into()))?;

        Ok(KNOWN_KEYS
            .iter()
            .filter(|k| !map.contains_key(**k))
            .copied()
            .collect())
    }

    /// Write this configuration as YAML.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("serialization failed: {e}")))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Initialize configuration and database files.
    ///
    /// With `is_test` the config file is left untouched and only the
    /// database file is created.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) if Path::new(name).is_absolute() => PathBuf::from(name),
            Some(name) if is_test => PathBuf::from(name),
            Some(name) => dir.join(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}

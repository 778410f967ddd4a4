use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod columns;

pub use columns::ColumnLayout;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub columns: ColumnLayout,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    #[serde(default = "default_business_files")]
    pub business_files: bool,
}

fn default_output_dir() -> String {
    ".".to_string()
}
fn default_file_prefix() -> String {
    "勤怠集計".to_string()
}
fn default_business_files() -> bool {
    true
}

/// Top-level keys a complete configuration file carries.
const CONFIG_FIELDS: [&str; 4] = ["columns", "output_dir", "file_prefix", "business_files"];

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: ColumnLayout::default(),
            output_dir: default_output_dir(),
            file_prefix: default_file_prefix(),
            business_files: default_business_files(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Config file to use: the override when given, the standard one otherwise.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(expand_tilde).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found.
    /// Missing fields fall back to their defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Top-level fields absent from the file at `path` (and therefore
    /// defaulted). A missing file reports every field.
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            return Ok(CONFIG_FIELDS.to_vec());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let value: serde_yaml::Value = if content.trim().is_empty() {
            serde_yaml::Value::Null
        } else {
            serde_yaml::from_str(&content)?
        };

        let missing = CONFIG_FIELDS
            .iter()
            .copied()
            .filter(|key| value.get(*key).is_none())
            .collect();

        Ok(missing)
    }

    pub fn output_dir(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    fn validate(&self) -> AppResult<()> {
        if self.file_prefix.trim().is_empty() {
            return Err(AppError::Config("file_prefix must not be empty".into()));
        }
        self.columns.validate()
    }
}

use crate::core::zone::{DEFAULT_UTC_OFFSET_HOURS, DEFAULT_ZONE_NAME, TimeZoneRules};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_zone_name")]
    pub zone_name: String,
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,
    /// Only entries carrying this tag are reported.
    #[serde(default = "default_tag_filter")]
    pub tag_filter: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_zone_name() -> String {
    DEFAULT_ZONE_NAME.to_string()
}
fn default_utc_offset() -> i32 {
    DEFAULT_UTC_OFFSET_HOURS
}
fn default_tag_filter() -> String {
    "Extra".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zone_name: default_zone_name(),
            utc_offset_hours: default_utc_offset(),
            tag_filter: default_tag_filter(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rtogglreport")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtogglreport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtogglreport.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Write the default configuration to `path`. Refuses to overwrite unless `force`.
    pub fn init_file(path: &Path, force: bool) -> AppResult<Self> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let cfg = Self::default();
        let yaml = serde_yaml::to_string(&cfg)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(cfg)
    }

    /// Reporting zone described by this configuration.
    pub fn zone(&self) -> AppResult<TimeZoneRules> {
        TimeZoneRules::new(self.zone_name.clone(), self.utc_offset_hours)
    }
}

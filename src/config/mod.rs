use crate::backlog::PageSize;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable overriding `api_url` from the config file.
pub const API_URL_ENV: &str = "RSURVEY_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_export_title")]
    pub export_title: String,
}

fn default_api_url() -> String {
    "http://localhost:3001".to_string()
}
fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_page_size() -> usize {
    10
}
fn default_request_timeout() -> u64 {
    10
}
fn default_export_title() -> String {
    "Service backlog".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            database: default_database(),
            page_size: default_page_size(),
            request_timeout_secs: default_request_timeout(),
            export_title: default_export_title(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rsurvey")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rsurvey")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rsurvey.conf")
    }

    /// Return the full path of the local SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rsurvey.sqlite")
    }

    /// Load configuration from the standard file, or defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse YAML content; missing fields fall back to defaults.
    pub fn parse(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        PageSize::try_from(self.page_size)?;
        if self.api_url.trim().is_empty() {
            return Err(AppError::Config("api_url must not be empty".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        if self.database.trim().is_empty() {
            return Err(AppError::Config("database must not be empty".into()));
        }
        Ok(())
    }

    /// Apply command-line and environment overrides, then validate the result.
    /// Flags win over the environment, the environment wins over the file.
    pub fn apply_overrides(&mut self, db: Option<&str>, api_url: Option<&str>) -> AppResult<()> {
        if let Some(custom_db) = db {
            self.database = custom_db.to_string();
        }

        if let Some(url) = api_url {
            self.api_url = url.to_string();
        } else if let Ok(url) = env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            self.api_url = url;
        }

        self.validate()
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Write the configuration file and make sure the database directory exists.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if !is_test {
            let yaml = serde_yaml::to_string(self)
                .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = self.database_path().parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(())
    }
}

use crate::errors::{AppError, AppResult};
use crate::source::cache::CachePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SOURCE_URL: &str = "https://denstoreklimadatabase.dk/en";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Page hosting the reference table
    pub source_url: String,
    /// CSS selector for candidate tables
    pub table_selector: String,
    /// Number of header cells the reference table must have
    pub table_columns: usize,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Keep the fetched dataset for this many seconds; `None` keeps it until restart
    pub cache_ttl_secs: Option<u64>,
    pub top_products: usize,
    pub dataset_limit: usize,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            table_selector: "table.cols-9".to_string(),
            table_columns: 9,
            request_timeout_secs: 30,
            user_agent: format!("grocery-co2/{}", env!("CARGO_PKG_VERSION")),
            cache_ttl_secs: None,
            top_products: 10,
            dataset_limit: 20,
            log_level: "warn".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".grocery-co2")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("grocery-co2.conf")
    }

    /// Load configuration from `path` (or the standard location), or return
    /// defaults if the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the default configuration to `path`, creating parent directories.
    pub fn init(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        if self.table_columns == 0 {
            return Err(AppError::Config("table_columns must be at least 1".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "request_timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cache_policy(&self) -> CachePolicy {
        match self.cache_ttl_secs {
            Some(secs) => CachePolicy::Ttl(Duration::from_secs(secs)),
            None => CachePolicy::UntilRestart,
        }
    }
}

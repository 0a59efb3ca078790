use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::fetch::persona::{
    PersonaHeaders, DEFAULT_DESKTOP_USER_AGENT, DEFAULT_MOBILE_USER_AGENT, DEFAULT_REFERER,
};

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub base: BaseConfig,
    pub scraper: ScraperConfig,
    pub file: FileConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct BaseConfig {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct ScraperConfig {
    pub timeout_secs: u64,
    pub max_concurrency: usize,
    pub desktop_user_agent: String,
    pub mobile_user_agent: String,
    pub referer: String,
}

impl ScraperConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn personas(&self) -> PersonaHeaders {
        PersonaHeaders {
            desktop_user_agent: self.desktop_user_agent.clone(),
            mobile_user_agent: self.mobile_user_agent.clone(),
            referer: self.referer.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    pub source_data: Option<String>,
    pub processing_data: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Loads settings from `path` (optional TOML file) and `APP__SECTION__KEY`
/// environment variables, on top of built-in defaults.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .set_default("base.name", env!("CARGO_PKG_NAME"))?
        .set_default("base.version", env!("CARGO_PKG_VERSION"))?
        .set_default("scraper.timeout_secs", 10)?
        .set_default("scraper.max_concurrency", 4)?
        .set_default("scraper.desktop_user_agent", DEFAULT_DESKTOP_USER_AGENT)?
        .set_default("scraper.mobile_user_agent", DEFAULT_MOBILE_USER_AGENT)?
        .set_default("scraper.referer", DEFAULT_REFERER)?
        .set_default("file.processing_data", "wishlist_entries.csv")?
        .set_default("logging.level", "info")?
        .add_source(File::new(path, FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    settings.try_deserialize::<AppConfig>()
}

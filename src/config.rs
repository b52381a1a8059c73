//! Environment-driven configuration.

use std::str::FromStr;

use serde_derive::Deserialize;

use crate::error::ConfigError;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig, ConfigError> {
    envy::from_env::<AppConfig>().map_err(ConfigError::env_parse)
}

fn default_url() -> String {
    "https://assetallocation.ru/etf/".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}

fn default_interval_sec() -> u64 {
    86_400
}

fn default_timeout_sec() -> u64 {
    30
}

#[derive(Deserialize, Debug)]
pub struct ScraperConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    // seconds between scrape runs
    #[serde(default = "default_interval_sec")]
    pub interval_sec: u64,
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,
}

pub fn load_scraper_config() -> Result<ScraperConfig, ConfigError> {
    envy::prefixed("SCRAPER_")
        .from_env::<ScraperConfig>()
        .map_err(ConfigError::env_parse)
}

fn default_store_path() -> String {
    "etf_data.jsonl".to_string()
}

#[derive(Deserialize, Debug)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: String,
}

pub fn load_store_config() -> Result<StoreConfig, ConfigError> {
    envy::prefixed("STORE_")
        .from_env::<StoreConfig>()
        .map_err(ConfigError::env_parse)
}

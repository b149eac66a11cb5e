use serde_derive::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

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
    envy::from_env::<AppConfig>().map_err(|err| ConfigError::env_parse("AppConfig", err))
}

fn default_base_url() -> String {
    "https://servicebus.ren.pt/datahubapi".to_string()
}

fn default_fetch_retries() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    250
}

#[derive(Deserialize, Debug)]
pub struct RenConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    // retries apply to transport failures only, never to HTTP error statuses
    #[serde(default = "default_fetch_retries")]
    pub fetch_retries: u32,
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

pub(crate) fn load_ren_config() -> Result<RenConfig, ConfigError> {
    envy::prefixed("REN_")
        .from_env::<RenConfig>()
        .map_err(|err| ConfigError::env_parse("RenConfig", err))
}

fn default_start_year() -> i32 {
    2020
}

fn default_end_year() -> i32 {
    2024
}

fn default_request_delay_ms() -> u64 {
    0
}

#[derive(Deserialize, Debug)]
pub struct CollectorConfig {
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    // inclusive, may equal start_year
    #[serde(default = "default_end_year")]
    pub end_year: i32,
    // pause between consecutive upstream requests, 0 disables
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

pub(crate) fn load_collector_config() -> Result<CollectorConfig, ConfigError> {
    envy::prefixed("COLLECTOR_")
        .from_env::<CollectorConfig>()
        .map_err(|err| ConfigError::env_parse("CollectorConfig", err))
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Deserialize, Debug)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

pub(crate) fn load_export_config() -> Result<ExportConfig, ConfigError> {
    envy::prefixed("EXPORT_")
        .from_env::<ExportConfig>()
        .map_err(|err| ConfigError::env_parse("ExportConfig", err))
}

//! Error types for the REN Data Hub CSV exporter.
//!
//! This module defines typed errors for the stages of the pipeline. Transport
//! failures and non-success HTTP statuses are recovered inside the fetcher
//! and never show up here; everything in this module ends the run.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to load {name} from environment: {message}")]
    EnvParse { name: &'static str, message: String },
}

/// Upstream payload errors.
#[derive(Error, Debug)]
pub enum FetchError {
    /// A success response whose body was not the expected JSON array
    #[error("malformed payload for {year}-{month:02}: {source}")]
    MalformedPayload {
        year: i32,
        month: u32,
        source: reqwest::Error,
    },
}

/// CSV export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing a header or record failed
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing buffered output failed
    #[error("failed to flush CSV output: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates an environment parse error for the named config section.
    pub fn env_parse(name: &'static str, err: impl std::fmt::Display) -> Self {
        Self::EnvParse {
            name,
            message: err.to_string(),
        }
    }
}

impl FetchError {
    /// Creates a malformed payload error for one (year, month) request.
    pub fn malformed_payload(year: i32, month: u32, source: reqwest::Error) -> Self {
        Self::MalformedPayload {
            year,
            month,
            source,
        }
    }
}

//! Error types for the ETF scraper.
//!
//! Cell- and row-level anomalies are absorbed inside the extraction
//! pipeline (a bad cell becomes an absent value, a short row is dropped
//! and counted); only the conditions below surface as errors.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// Page fetch errors
    #[error("fetch error")]
    Fetch(#[from] FetchError),

    /// Table extraction errors
    #[error("extraction error")]
    Extract(#[from] ExtractError),

    /// Snapshot store errors
    #[error("storage error")]
    Store(#[from] StoreError),

    /// Generic errors that don't fit other categories
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to parse environment variables: {0}")]
    EnvParse(String),
}

impl ConfigError {
    pub fn env_parse(err: impl std::fmt::Display) -> Self {
        Self::EnvParse(err.to_string())
    }
}

/// Page fetch errors.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
}

/// Table extraction errors.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The document yielded no usable rows. Fatal for the run: it usually
    /// means the source page structure changed or the fetch returned a
    /// non-data page.
    #[error("no records could be extracted from the table")]
    NoRecords,
}

/// Snapshot store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// File I/O failed
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Record (de)serialization failed
    #[error("record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::env_parse("missing field `url`");
        assert_eq!(
            err.to_string(),
            "failed to parse environment variables: missing field `url`"
        );
    }

    #[test]
    fn fetch_status_error_display() {
        let err = FetchError::Status {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "request failed with status 503: maintenance"
        );
    }

    #[test]
    fn extract_error_display() {
        assert_eq!(
            ExtractError::NoRecords.to_string(),
            "no records could be extracted from the table"
        );
    }

    #[test]
    fn component_errors_convert_to_top_level() {
        let err: Error = ExtractError::NoRecords.into();
        assert!(matches!(err, Error::Extract(_)));

        let err: Error = ConfigError::env_parse("x").into();
        assert!(matches!(err, Error::Config(_)));
    }
}

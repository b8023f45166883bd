//! Error types for site startup.

use thiserror::Error;

/// Failures that can happen while the site boots: reading the embedded
/// content file or installing the log subscriber. Nothing after mount can fail.
#[derive(Debug, Error)]
pub enum SiteError {
    /// `site.toml` is not valid TOML or does not match the schema.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but violates a structural rule (missing home page, ...).
    #[error("invalid site config: {0}")]
    Invalid(String),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;

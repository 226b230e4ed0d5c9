//! Error types for the report binary.

use std::path::PathBuf;

/// Top-level error for the report binary.
///
/// Each variant wraps a specific failure mode, providing a single error
/// type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Configuration loading or validation failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: quakefeed_core::ConfigError,
    },

    /// The feed file could not be read.
    #[error("failed to read feed {path}: {source}")]
    ReadFeed {
        /// Path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The feed is not a GeoJSON feature collection.
    #[error("failed to parse feed JSON: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// Writing the report failed.
    #[error("failed to write report: {source}")]
    Write {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

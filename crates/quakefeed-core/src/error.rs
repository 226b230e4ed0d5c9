//! Error types for the `quakefeed-core` crate.
//!
//! Only two inputs can fail to format: a magnitude that has no finite
//! one-decimal rendering, and a timestamp the calendar cannot represent.
//! Everything else (empty or oddly shaped locations included) is handled by
//! fallback branches.

/// A magnitude that cannot be rendered as display text.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// The magnitude is NaN or infinite.
    #[error("magnitude is not finite: {magnitude}")]
    NonFinite {
        /// The rejected value.
        magnitude: f64,
    },

    /// The magnitude is finite but too large for one-decimal rendering.
    #[error("magnitude {magnitude} is outside the displayable range")]
    Unrepresentable {
        /// The rejected value.
        magnitude: f64,
    },
}

/// A timestamp that cannot be rendered as date and time text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemporalError {
    /// The instant lies outside the range of the calendar.
    #[error("timestamp {timestamp_millis} ms is outside the representable date range")]
    OutOfRange {
        /// The rejected value, in milliseconds since the Unix epoch.
        timestamp_millis: i64,
    },

    /// A date or time pattern could not be rendered.
    #[error("invalid date/time pattern: {pattern:?}")]
    Pattern {
        /// The offending strftime pattern.
        pattern: String,
    },
}

/// Failure to build a row for a single record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    /// The magnitude field failed.
    #[error("magnitude: {0}")]
    Magnitude(#[from] FormatError),

    /// The timestamp field failed.
    #[error("timestamp: {0}")]
    Timestamp(#[from] TemporalError),
}

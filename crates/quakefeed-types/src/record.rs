//! The earthquake feed record.
//!
//! A record is created once per feed item by whatever parsed the feed and is
//! never mutated afterwards. When the feed is refreshed the caller replaces
//! the whole list.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One earthquake event as delivered by the upstream feed.
///
/// No validation is performed on construction: magnitudes may be negative
/// or fractional, the location may be empty, and the timestamp may lie far
/// outside any calendar the formatter can render. Those cases are handled
/// (or rejected) when the record is turned into a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EarthquakeRecord {
    /// Magnitude as reported by the feed.
    magnitude: f64,
    /// Free-form location text, e.g. `"21km N of Cairo, Egypt"`.
    location: String,
    /// Milliseconds since the Unix epoch (UTC).
    #[ts(type = "number")]
    timestamp_millis: i64,
    /// Link to the event's detail page. Opaque to the pipeline.
    url: String,
}

impl EarthquakeRecord {
    /// Create a record from its four feed fields.
    pub fn new(
        magnitude: f64,
        location: impl Into<String>,
        timestamp_millis: i64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            magnitude,
            location: location.into(),
            timestamp_millis,
            url: url.into(),
        }
    }

    /// Return the magnitude.
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Return the raw location text.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Return the event time in milliseconds since the Unix epoch.
    pub const fn timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }

    /// Return the detail URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

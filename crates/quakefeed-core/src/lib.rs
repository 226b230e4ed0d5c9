//! Record-to-presentation pipeline for the Quakefeed earthquake list.
//!
//! Turns already-parsed [`EarthquakeRecord`]s into display-ready
//! [`RowViewModel`]s. Nothing here performs I/O, caches, or holds mutable
//! state; the same record and configuration always produce the same row.
//!
//! # Architecture
//!
//! - [`location`] -- [`LocationSplitter`]: proximity phrase / primary place.
//! - [`magnitude`] -- One-decimal text and [`SeverityBucket`].
//! - [`temporal`] -- [`TemporalFormatter`]: date and time text in a fixed zone.
//! - [`builder`] -- [`RowBuilder`]: composes the three per record.
//! - [`config`] -- [`QuakefeedConfig`] loaded from `quakefeed-config.yaml`.
//! - [`error`] -- [`FormatError`], [`TemporalError`], [`RowError`].
//!
//! # Usage
//!
//! ```
//! use quakefeed_core::RowBuilder;
//! use quakefeed_types::EarthquakeRecord;
//!
//! let records = vec![
//!     EarthquakeRecord::new(7.2, "88km N of Yelizovo, Russia", 385_084_800_000, "u1"),
//!     EarthquakeRecord::new(1.9, "Pacific-Antarctic Ridge", 385_084_800_000, "u2"),
//! ];
//!
//! let builder = RowBuilder::default();
//! let rows = builder.try_build_rows(&records).ok().unwrap_or_default();
//!
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].magnitude_text, "7.2");
//! assert_eq!(rows[0].proximity_phrase, "88km N of ");
//! assert_eq!(rows[1].proximity_phrase, "Near the");
//! assert_eq!(rows[1].severity_bucket.index(), 0);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod location;
pub mod magnitude;
pub mod temporal;

// Re-export primary types at crate root.
pub use builder::RowBuilder;
pub use config::{
    ConfigError, PresentationConfig, QuakefeedConfig, TIMEZONE_ENV_VAR, TimeZoneSetting,
};
pub use error::{FormatError, RowError, TemporalError};
pub use location::{LocationSplitter, SplitLocation};
pub use magnitude::{MagnitudeDisplay, format_magnitude, magnitude_text, severity_bucket};
pub use temporal::{FormattedInstant, TemporalFormatter};

pub use quakefeed_types::{EarthquakeRecord, RowViewModel, SeverityBucket};

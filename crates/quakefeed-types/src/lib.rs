//! Shared type definitions for the Quakefeed presentation pipeline.
//!
//! This crate holds the values that cross the pipeline boundaries: the
//! immutable feed record going in and the display-ready row coming out.
//! Types flow downstream to `TypeScript` via `ts-rs` so web renderers can
//! consume rows without redefining them.
//!
//! # Modules
//!
//! - [`record`] -- The parsed feed record ([`EarthquakeRecord`])
//! - [`row`] -- The display-ready row ([`RowViewModel`]) and its [`SeverityBucket`]

pub mod record;
pub mod row;

// Re-export all public types at crate root for convenience.
pub use record::EarthquakeRecord;
pub use row::{RowViewModel, SeverityBucket};

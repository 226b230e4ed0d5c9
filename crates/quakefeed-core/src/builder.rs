//! Composing the formatters into one [`RowViewModel`] per record.
//!
//! The builder holds only read-only settings, so a single instance can be
//! shared across threads and mapped over records in any order. Each call is
//! independent of every other call.

use tracing::{debug, warn};

use quakefeed_types::{EarthquakeRecord, RowViewModel};

use crate::config::{ConfigError, PresentationConfig};
use crate::error::RowError;
use crate::location::LocationSplitter;
use crate::magnitude::format_magnitude;
use crate::temporal::TemporalFormatter;

/// Turns [`EarthquakeRecord`]s into [`RowViewModel`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowBuilder {
    splitter: LocationSplitter,
    temporal: TemporalFormatter,
}

impl RowBuilder {
    /// Create a builder from validated presentation settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the settings fail validation.
    pub fn new(config: &PresentationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(
            LocationSplitter::from_config(config),
            TemporalFormatter::from_config(config),
        ))
    }

    /// Create a builder from already-constructed formatters.
    pub const fn from_parts(splitter: LocationSplitter, temporal: TemporalFormatter) -> Self {
        Self { splitter, temporal }
    }

    /// Return the location splitter.
    pub const fn splitter(&self) -> &LocationSplitter {
        &self.splitter
    }

    /// Return the date/time formatter.
    pub const fn temporal(&self) -> &TemporalFormatter {
        &self.temporal
    }

    /// Build the row for one record.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::Magnitude`] for a magnitude with no finite display
    /// text, or [`RowError::Timestamp`] for a timestamp outside the calendar.
    pub fn build(&self, record: &EarthquakeRecord) -> Result<RowViewModel, RowError> {
        let magnitude = format_magnitude(record.magnitude())?;
        let instant = self.temporal.format(record.timestamp_millis())?;
        let location = self.splitter.split(record.location());

        Ok(RowViewModel {
            magnitude_text: magnitude.text,
            severity_bucket: magnitude.bucket,
            proximity_phrase: location.proximity_phrase,
            primary_place: location.primary_place,
            date_text: instant.date_text,
            time_text: instant.time_text,
            url: record.url().to_owned(),
        })
    }

    /// Build one result per record, in input order.
    ///
    /// A failing record yields an `Err` in its slot and does not affect its
    /// neighbours.
    pub fn build_rows<'a, I>(&self, records: I) -> Vec<Result<RowViewModel, RowError>>
    where
        I: IntoIterator<Item = &'a EarthquakeRecord>,
    {
        let rows: Vec<_> = records
            .into_iter()
            .map(|record| {
                self.build(record).inspect_err(|err| {
                    warn!(
                        url = record.url(),
                        magnitude = record.magnitude(),
                        timestamp_millis = record.timestamp_millis(),
                        error = %err,
                        "Record could not be formatted"
                    );
                })
            })
            .collect();

        debug!(
            rows = rows.len(),
            failed = rows.iter().filter(|row| row.is_err()).count(),
            "Built presentation rows"
        );
        rows
    }

    /// Build every row, stopping at the first record that fails.
    ///
    /// # Errors
    ///
    /// Returns the first [`RowError`] encountered.
    pub fn try_build_rows<'a, I>(&self, records: I) -> Result<Vec<RowViewModel>, RowError>
    where
        I: IntoIterator<Item = &'a EarthquakeRecord>,
    {
        records.into_iter().map(|record| self.build(record)).collect()
    }
}

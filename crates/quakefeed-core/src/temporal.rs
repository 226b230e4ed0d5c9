//! Rendering event instants as separate date and time strings.
//!
//! Timestamps are milliseconds since the Unix epoch. They are converted to
//! an absolute instant, shifted into the configured zone, and rendered with
//! two strftime patterns. The defaults produce `"Mar 03, 1984"` and
//! `"4:30 PM"`. Month names and AM/PM markers are English only.

use std::fmt::Write as _;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::config::{PresentationConfig, TimeZoneSetting};
use crate::error::TemporalError;

/// Date and time text for one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedInstant {
    /// Calendar date, e.g. `"Mar 03, 1984"`.
    pub date_text: String,
    /// Wall-clock time, e.g. `"4:30 PM"`.
    pub time_text: String,
}

/// Formats epoch-millisecond timestamps in a fixed zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalFormatter {
    date_pattern: String,
    time_pattern: String,
    timezone: TimeZoneSetting,
}

impl TemporalFormatter {
    /// Create a formatter from explicit patterns and zone.
    ///
    /// Patterns are not validated here; an unknown specifier surfaces as
    /// [`TemporalError::Pattern`] from [`format`](Self::format).
    pub fn new(
        date_pattern: impl Into<String>,
        time_pattern: impl Into<String>,
        timezone: TimeZoneSetting,
    ) -> Self {
        Self {
            date_pattern: date_pattern.into(),
            time_pattern: time_pattern.into(),
            timezone,
        }
    }

    /// Create a formatter from the presentation settings.
    pub fn from_config(config: &PresentationConfig) -> Self {
        Self::new(
            config.date_pattern.as_str(),
            config.time_pattern.as_str(),
            config.timezone,
        )
    }

    /// Return the zone this formatter renders in.
    pub const fn timezone(&self) -> TimeZoneSetting {
        self.timezone
    }

    /// Render `timestamp_millis` as date and time text.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::OutOfRange`] if the instant lies outside the
    /// calendar's range (about 262,000 years either side of year 0), or
    /// [`TemporalError::Pattern`] if a pattern cannot be rendered.
    pub fn format(&self, timestamp_millis: i64) -> Result<FormattedInstant, TemporalError> {
        let instant = DateTime::<Utc>::from_timestamp_millis(timestamp_millis)
            .ok_or(TemporalError::OutOfRange { timestamp_millis })?;

        match self.timezone {
            TimeZoneSetting::Utc => self.render(&instant),
            TimeZoneSetting::Local => self.render(&instant.with_timezone(&Local)),
            TimeZoneSetting::Fixed(offset) => self.render(&instant.with_timezone(&offset)),
        }
    }

    fn render<Tz>(&self, instant: &DateTime<Tz>) -> Result<FormattedInstant, TemporalError>
    where
        Tz: TimeZone,
        Tz::Offset: core::fmt::Display,
    {
        Ok(FormattedInstant {
            date_text: render_pattern(instant, &self.date_pattern)?,
            time_text: render_pattern(instant, &self.time_pattern)?,
        })
    }
}

impl Default for TemporalFormatter {
    fn default() -> Self {
        Self::from_config(&PresentationConfig::default())
    }
}

/// Write `instant` through `pattern` without panicking on bad specifiers.
fn render_pattern<Tz>(instant: &DateTime<Tz>, pattern: &str) -> Result<String, TemporalError>
where
    Tz: TimeZone,
    Tz::Offset: core::fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", instant.format(pattern)).map_err(|_err| TemporalError::Pattern {
        pattern: pattern.to_owned(),
    })?;
    Ok(out)
}

//! Configuration loading and typed config structures for Quakefeed.
//!
//! The canonical configuration lives in `quakefeed-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror the
//! YAML structure and provides a loader that reads and validates the file.
//! Once validated the configuration is read-only; the formatters copy what
//! they need out of it.

use std::path::Path;
use std::str::FromStr;

use chrono::FixedOffset;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `presentation.timezone`.
pub const TIMEZONE_ENV_VAR: &str = "QUAKEFEED_TIMEZONE";

/// Seconds in one hour.
const SECONDS_PER_HOUR: i32 = 3600;

/// Seconds in one minute.
const SECONDS_PER_MINUTE: i32 = 60;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but holds an unusable value.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `quakefeed-config.yaml`. Every field has a
/// default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuakefeedConfig {
    /// Formatting rules for rows.
    #[serde(default)]
    pub presentation: PresentationConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl QuakefeedConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value fails validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_file_with_override(path, None)
    }

    /// Load configuration from a YAML file, replacing `presentation.timezone`
    /// with `timezone` when one is given.
    ///
    /// Callers typically pass the value of [`TIMEZONE_ENV_VAR`].
    ///
    /// # Errors
    ///
    /// As [`Self::from_file`]; an unrecognised `timezone` is
    /// [`ConfigError::Invalid`].
    pub fn from_file_with_override(
        path: &Path,
        timezone: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_with_override(&contents, timezone)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value fails validation.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse_with_override(yaml, None)
    }

    /// Parse configuration from a YAML string, replacing
    /// `presentation.timezone` with `timezone` when one is given.
    ///
    /// # Errors
    ///
    /// As [`Self::parse`]; an unrecognised `timezone` is
    /// [`ConfigError::Invalid`].
    pub fn parse_with_override(yaml: &str, timezone: Option<&str>) -> Result<Self, ConfigError> {
        // serde_yml maps an empty document to unit, not to an empty mapping.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.presentation.apply_timezone_override(timezone)?;
        config.presentation.validate()?;
        Ok(config)
    }
}

/// Formatting rules applied to every record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PresentationConfig {
    /// Literal that separates the proximity phrase from the place name.
    #[serde(default = "default_location_separator")]
    pub location_separator: String,

    /// Phrase shown when the location has no separator.
    #[serde(default = "default_fallback_proximity_phrase")]
    pub fallback_proximity_phrase: String,

    /// strftime pattern for the date column.
    #[serde(default = "default_date_pattern")]
    pub date_pattern: String,

    /// strftime pattern for the time column.
    #[serde(default = "default_time_pattern")]
    pub time_pattern: String,

    /// Zone in which dates and times are rendered.
    #[serde(default)]
    pub timezone: TimeZoneSetting,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            location_separator: default_location_separator(),
            fallback_proximity_phrase: default_fallback_proximity_phrase(),
            date_pattern: default_date_pattern(),
            time_pattern: default_time_pattern(),
            timezone: TimeZoneSetting::default(),
        }
    }
}

impl PresentationConfig {
    /// Check that every value is usable by the formatters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an empty separator or a pattern
    /// containing an unknown strftime specifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.location_separator.is_empty() {
            return Err(ConfigError::Invalid {
                reason: "location_separator must not be empty".to_owned(),
            });
        }
        validate_pattern("date_pattern", &self.date_pattern)?;
        validate_pattern("time_pattern", &self.time_pattern)?;
        Ok(())
    }

    /// Replace the timezone with `value` when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `value` is not a recognised zone.
    pub fn apply_timezone_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        if let Some(raw) = value {
            self.timezone = raw.parse()?;
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// The zone in which event instants are rendered.
///
/// Parsed from `"utc"`, `"local"`, or a signed `"+HH:MM"` / `"-HH:MM"`
/// offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeZoneSetting {
    /// Coordinated Universal Time.
    #[default]
    Utc,
    /// The host system's local zone at the time of formatting.
    Local,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl FromStr for TimeZoneSetting {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "utc" | "z" => return Ok(Self::Utc),
            "local" => return Ok(Self::Local),
            _ => {}
        }
        parse_offset(trimmed).map(Self::Fixed)
    }
}

impl TryFrom<String> for TimeZoneSetting {
    type Error = ConfigError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<TimeZoneSetting> for String {
    fn from(setting: TimeZoneSetting) -> Self {
        setting.to_string()
    }
}

impl core::fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Utc => write!(f, "utc"),
            Self::Local => write!(f, "local"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// Parse a `+HH:MM` / `-HH:MM` offset. Both fields are exactly two digits.
fn parse_offset(raw: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::Invalid {
        reason: format!("unknown timezone {raw:?} (expected utc, local, or +HH:MM)"),
    };

    let (negative, rest) = if let Some(rest) = raw.strip_prefix('+') {
        (false, rest)
    } else if let Some(rest) = raw.strip_prefix('-') {
        (true, rest)
    } else {
        return Err(invalid());
    };

    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    if !is_two_digits(hours) || !is_two_digits(minutes) {
        return Err(invalid());
    }
    let hours: i32 = hours.parse().map_err(|_err| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_err| invalid())?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    let magnitude = hours
        .checked_mul(SECONDS_PER_HOUR)
        .and_then(|h| minutes.checked_mul(SECONDS_PER_MINUTE).and_then(|m| h.checked_add(m)))
        .ok_or_else(invalid)?;
    let seconds = if negative {
        magnitude.checked_neg().ok_or_else(invalid)?
    } else {
        magnitude
    };
    FixedOffset::east_opt(seconds).ok_or_else(invalid)
}

fn is_two_digits(field: &str) -> bool {
    field.len() == 2 && field.bytes().all(|b| b.is_ascii_digit())
}

/// Reject patterns chrono cannot render.
fn validate_pattern(field: &str, pattern: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::Invalid {
            reason: format!("{field} {pattern:?} contains an unknown strftime specifier"),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_location_separator() -> String {
    " of ".to_owned()
}

fn default_fallback_proximity_phrase() -> String {
    "Near the".to_owned()
}

fn default_date_pattern() -> String {
    "%b %d, %Y".to_owned()
}

fn default_time_pattern() -> String {
    "%-I:%M %p".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}

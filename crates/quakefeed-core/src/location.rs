//! Splitting a feed location into a proximity phrase and a primary place.
//!
//! Feed locations look like `"21km N of Cairo, Egypt"`. The text up to and
//! including the first separator (`" of "` by default) becomes the
//! proximity phrase; the rest is the primary place. A location without the
//! separator gets the fallback phrase and is kept whole.

use crate::config::PresentationConfig;

/// The two display halves of a location string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLocation {
    /// `"21km N of "` or the fallback phrase.
    pub proximity_phrase: String,
    /// `"Cairo, Egypt"`, or the whole location when no split occurred.
    pub primary_place: String,
    /// Whether the separator was found.
    pub was_split: bool,
}

/// Splits location strings on the first occurrence of a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSplitter {
    separator: String,
    fallback_phrase: String,
}

impl LocationSplitter {
    /// Create a splitter with an explicit separator and fallback phrase.
    ///
    /// An empty separator never matches, so every location falls back.
    pub fn new(separator: impl Into<String>, fallback_phrase: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            fallback_phrase: fallback_phrase.into(),
        }
    }

    /// Create a splitter from the presentation settings.
    pub fn from_config(config: &PresentationConfig) -> Self {
        Self::new(
            config.location_separator.as_str(),
            config.fallback_proximity_phrase.as_str(),
        )
    }

    /// Return the configured separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Return the configured fallback phrase.
    pub fn fallback_phrase(&self) -> &str {
        &self.fallback_phrase
    }

    /// Split `location` at the first separator. Never fails.
    pub fn split(&self, location: &str) -> SplitLocation {
        let parts = if self.separator.is_empty() {
            None
        } else {
            location.split_once(self.separator.as_str())
        };

        match parts {
            Some((offset, place)) => SplitLocation {
                proximity_phrase: format!("{offset}{}", self.separator),
                primary_place: place.to_owned(),
                was_split: true,
            },
            None => SplitLocation {
                proximity_phrase: self.fallback_phrase.clone(),
                primary_place: location.to_owned(),
                was_split: false,
            },
        }
    }
}

impl Default for LocationSplitter {
    fn default() -> Self {
        Self::from_config(&PresentationConfig::default())
    }
}

//! Display-ready row produced from one [`EarthquakeRecord`](crate::EarthquakeRecord).
//!
//! A row is recomputed whenever the record or the formatting rules change;
//! it is never patched in place.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Abstract severity tier derived from a magnitude.
///
/// Index 0 covers everything below magnitude 2, indices 1 through 8 cover
/// one integer step each (2 through 9), and index 9 is the overflow tier
/// for magnitude 10 and above. The caller maps the index onto a concrete
/// visual indicator such as a color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct SeverityBucket(u8);

impl SeverityBucket {
    /// The lowest tier (magnitudes below 2).
    pub const LOWEST: Self = Self(0);

    /// The overflow tier (magnitude 10 and above, and anything unmatched).
    pub const OVERFLOW: Self = Self(9);

    /// Number of distinct tiers.
    pub const COUNT: usize = 10;

    /// Build a bucket from a raw index. Returns `None` above the overflow tier.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index <= Self::OVERFLOW.0 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Return the tier index in `0..=9`.
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl core::fmt::Display for SeverityBucket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a list renderer needs to draw one earthquake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RowViewModel {
    /// Magnitude with exactly one fractional digit, e.g. `"3.2"`.
    pub magnitude_text: String,
    /// Severity tier for the magnitude indicator.
    pub severity_bucket: SeverityBucket,
    /// Leading distance/direction fragment (`"21km N of "`) or the fallback phrase.
    pub proximity_phrase: String,
    /// Named place after the proximity phrase, or the whole location.
    pub primary_place: String,
    /// Calendar date of the event.
    pub date_text: String,
    /// Wall-clock time of the event.
    pub time_text: String,
    /// Detail URL copied from the record.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_accepts_zero_through_nine() {
        for i in 0..=9 {
            assert_eq!(SeverityBucket::from_index(i).map(SeverityBucket::index), Some(i));
        }
        assert_eq!(SeverityBucket::from_index(10), None);
        assert_eq!(SeverityBucket::from_index(u8::MAX), None);
    }

    #[test]
    fn overflow_tier_is_last() {
        assert_eq!(SeverityBucket::from_index(9), Some(SeverityBucket::OVERFLOW));
        assert!(SeverityBucket::LOWEST < SeverityBucket::OVERFLOW);
        assert_eq!(SeverityBucket::OVERFLOW.index(), 9);
        assert_eq!(SeverityBucket::COUNT, 10);
    }

    #[test]
    fn bucket_serializes_as_plain_number() {
        let json = serde_json::to_string(&SeverityBucket::OVERFLOW).ok();
        assert_eq!(json.as_deref(), Some("9"));
    }
}

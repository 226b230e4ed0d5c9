//! Magnitude display text and severity tiers.
//!
//! # Rounding
//!
//! The display text is the magnitude rounded to one decimal place, ties
//! away from zero, on the shortest decimal form of the `f64`. So `2.25`
//! renders as `"2.3"` and `-1.25` as `"-1.3"`. Negative values keep their
//! sign even when they round to zero, so `-0.04` renders as `"-0.0"`. Only
//! an exact zero of either sign renders as `"0.0"`.
//!
//! # Severity
//!
//! | `floor(magnitude)` | bucket |
//! |---|---|
//! | below 2 | 0 |
//! | 2 through 9 | `floor - 1` |
//! | 10 and above | 9 |
//!
//! NaN and infinities land in the overflow tier. Their text is an error.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use quakefeed_types::SeverityBucket;

use crate::error::FormatError;

/// Number of fractional digits in the display text.
const DISPLAY_SCALE: u32 = 1;

/// Lowest integer magnitude with a tier of its own.
const FIRST_STEPPED_MAGNITUDE: u8 = 2;

/// Highest integer magnitude with a tier of its own.
const LAST_STEPPED_MAGNITUDE: u8 = 9;

/// Display text and tier for one magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagnitudeDisplay {
    /// One-decimal text, e.g. `"3.2"`.
    pub text: String,
    /// Severity tier.
    pub bucket: SeverityBucket,
}

/// Format a magnitude into display text and a severity tier.
///
/// # Errors
///
/// Returns [`FormatError`] when the text cannot be produced (see
/// [`magnitude_text`]).
pub fn format_magnitude(magnitude: f64) -> Result<MagnitudeDisplay, FormatError> {
    Ok(MagnitudeDisplay {
        text: magnitude_text(magnitude)?,
        bucket: severity_bucket(magnitude),
    })
}

/// Render a magnitude with exactly one fractional digit.
///
/// # Errors
///
/// Returns [`FormatError::NonFinite`] for NaN or infinity, and
/// [`FormatError::Unrepresentable`] for values beyond the decimal range
/// (roughly `7.9e27` at one decimal place).
pub fn magnitude_text(magnitude: f64) -> Result<String, FormatError> {
    if !magnitude.is_finite() {
        return Err(FormatError::NonFinite { magnitude });
    }

    // `Display` for f64 yields the shortest text that round-trips, so 2.25
    // and 2.35 are seen as written rather than as their binary expansions.
    let exact = Decimal::from_str(&magnitude.to_string())
        .map_err(|_err| FormatError::Unrepresentable { magnitude })?;
    let mut rounded =
        exact.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    // Rounding to zero clears the decimal's sign bit.
    if rounded.is_zero() {
        rounded.set_sign_negative(magnitude < 0.0);
    }
    rounded.rescale(DISPLAY_SCALE);
    if rounded.scale() != DISPLAY_SCALE {
        return Err(FormatError::Unrepresentable { magnitude });
    }

    Ok(rounded.to_string())
}

/// Map a magnitude onto its severity tier. Never fails.
pub fn severity_bucket(magnitude: f64) -> SeverityBucket {
    if !magnitude.is_finite() {
        return SeverityBucket::OVERFLOW;
    }

    let floor = magnitude.floor();
    if floor < f64::from(FIRST_STEPPED_MAGNITUDE) {
        return SeverityBucket::LOWEST;
    }
    if floor > f64::from(LAST_STEPPED_MAGNITUDE) {
        return SeverityBucket::OVERFLOW;
    }

    // floor is an integer in 2..=9 here; find its step.
    (FIRST_STEPPED_MAGNITUDE..=LAST_STEPPED_MAGNITUDE)
        .rev()
        .find(|step| floor >= f64::from(*step))
        .and_then(|step| SeverityBucket::from_index(step.saturating_sub(1)))
        .unwrap_or(SeverityBucket::OVERFLOW)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn bucket(magnitude: f64) -> u8 {
        severity_bucket(magnitude).index()
    }

    fn text(magnitude: f64) -> String {
        magnitude_text(magnitude).unwrap()
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(bucket(1.9), 0);
        assert_eq!(bucket(2.0), 1);
        assert_eq!(bucket(9.9), 8);
        assert_eq!(bucket(10.0), 9);
        assert_eq!(bucket(-0.5), 0);
    }

    #[test]
    fn one_bucket_per_integer_step() {
        assert_eq!(bucket(0.0), 0);
        assert_eq!(bucket(1.0), 0);
        assert_eq!(bucket(2.99), 1);
        assert_eq!(bucket(3.0), 2);
        assert_eq!(bucket(4.5), 3);
        assert_eq!(bucket(5.0), 4);
        assert_eq!(bucket(6.7), 5);
        assert_eq!(bucket(7.2), 6);
        assert_eq!(bucket(8.0), 7);
        assert_eq!(bucket(9.0), 8);
        assert_eq!(bucket(12.3), 9);
    }

    #[test]
    fn large_negative_magnitudes_are_lowest() {
        assert_eq!(bucket(-3.0), 0);
        assert_eq!(bucket(-1.0e12), 0);
    }

    #[test]
    fn non_finite_magnitudes_overflow() {
        assert_eq!(severity_bucket(f64::NAN), SeverityBucket::OVERFLOW);
        assert_eq!(severity_bucket(f64::INFINITY), SeverityBucket::OVERFLOW);
        assert_eq!(severity_bucket(f64::NEG_INFINITY), SeverityBucket::OVERFLOW);
    }

    #[test]
    fn text_has_one_fractional_digit() {
        assert_eq!(text(3.2), "3.2");
        assert_eq!(text(7.0), "7.0");
        assert_eq!(text(0.0), "0.0");
        assert_eq!(text(10.0), "10.0");
        assert_eq!(text(6.789), "6.8");
        assert_eq!(text(4.44), "4.4");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(text(2.25), "2.3");
        assert_eq!(text(2.35), "2.4");
        assert_eq!(text(0.15), "0.2");
        assert_eq!(text(-1.25), "-1.3");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(text(-1.0), "-1.0");
        assert_eq!(text(-0.5), "-0.5");
    }

    #[test]
    fn negative_values_rounding_to_zero_keep_sign() {
        assert_eq!(text(-0.04), "-0.0");
        assert_eq!(text(-0.05), "-0.1");
        assert_eq!(text(-1.0e-30), "-0.0");
        assert_eq!(text(0.04), "0.0");
    }

    #[test]
    fn exact_zero_is_unsigned() {
        assert_eq!(text(0.0), "0.0");
        assert_eq!(text(-0.0), "0.0");
    }

    #[test]
    fn non_finite_text_is_an_error() {
        assert!(matches!(
            magnitude_text(f64::NAN),
            Err(FormatError::NonFinite { .. })
        ));
        assert!(matches!(
            magnitude_text(f64::INFINITY),
            Err(FormatError::NonFinite { .. })
        ));
        assert!(matches!(
            format_magnitude(f64::NEG_INFINITY),
            Err(FormatError::NonFinite { .. })
        ));
    }

    #[test]
    fn huge_values_are_unrepresentable() {
        assert!(matches!(
            magnitude_text(1.0e30),
            Err(FormatError::Unrepresentable { .. })
        ));
    }

    #[test]
    fn format_combines_text_and_bucket() {
        let display = format_magnitude(7.2).unwrap();
        assert_eq!(display.text, "7.2");
        assert_eq!(display.bucket.index(), 6);
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        /// `-?\d+\.\d`
        fn has_single_fraction_digit(text: &str) -> bool {
            let unsigned = text.strip_prefix('-').unwrap_or(text);
            match unsigned.split_once('.') {
                Some((whole, fraction)) => {
                    !whole.is_empty()
                        && whole.chars().all(|c| c.is_ascii_digit())
                        && fraction.len() == 1
                        && fraction.chars().all(|c| c.is_ascii_digit())
                }
                None => false,
            }
        }

        proptest! {
            #[test]
            fn text_always_matches_display_pattern(magnitude in -1.0e9_f64..1.0e9_f64) {
                let text = magnitude_text(magnitude);
                prop_assert!(text.is_ok());
                let text = text.unwrap_or_default();
                prop_assert!(has_single_fraction_digit(&text), "bad text {text:?}");
            }

            #[test]
            fn bucket_is_always_in_range(magnitude in proptest::num::f64::ANY) {
                prop_assert!(severity_bucket(magnitude).index() <= 9);
            }

            #[test]
            fn bucket_never_decreases(a in -20.0_f64..20.0, b in -20.0_f64..20.0) {
                let (low, high) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(severity_bucket(low) <= severity_bucket(high));
            }
        }
    }
}

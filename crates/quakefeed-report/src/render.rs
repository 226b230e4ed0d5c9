//! Rendering rows for the terminal or as JSON.
//!
//! The severity palette lives here rather than in the core: the core only
//! hands out an abstract tier and each renderer picks its own colors.

use std::io::Write;

use quakefeed_types::{RowViewModel, SeverityBucket};

use crate::error::ReportError;

/// Hex color per severity tier, lowest first.
pub const SEVERITY_PALETTE: [&str; SeverityBucket::COUNT] = [
    "#4A7BA7", "#04B4B3", "#10CAC9", "#F5A623", "#FF7D50", "#FC6644", "#E75F40", "#E13A20",
    "#D93218", "#C03823",
];

/// Return the palette color for a tier.
pub fn severity_color(bucket: SeverityBucket) -> &'static str {
    SEVERITY_PALETTE
        .get(usize::from(bucket.index()))
        .copied()
        .unwrap_or("#C03823")
}

/// Write one line per row: magnitude, color, location, date, time.
pub fn write_table<W: Write>(out: &mut W, rows: &[RowViewModel]) -> Result<(), ReportError> {
    let locations: Vec<String> = rows
        .iter()
        .map(|row| join_location(&row.proximity_phrase, &row.primary_place))
        .collect();
    let width = locations
        .iter()
        .map(|location| location.chars().count())
        .max()
        .unwrap_or(0);

    for (row, location) in rows.iter().zip(&locations) {
        writeln!(
            out,
            "{:>5}  {}  {:<width$}  {}  {}",
            row.magnitude_text,
            severity_color(row.severity_bucket),
            location,
            row.date_text,
            row.time_text,
        )?;
    }
    Ok(())
}

/// Join the two location halves for a single column.
///
/// A split phrase already ends with the separator's trailing space; the
/// fallback phrase needs one added.
fn join_location(phrase: &str, place: &str) -> String {
    if phrase.is_empty() || place.is_empty() || phrase.ends_with(char::is_whitespace) {
        format!("{phrase}{place}")
    } else {
        format!("{phrase} {place}")
    }
}

/// Write the rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, rows: &[RowViewModel]) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn row(magnitude_text: &str, bucket: u8, phrase: &str, place: &str) -> RowViewModel {
        RowViewModel {
            magnitude_text: magnitude_text.to_owned(),
            severity_bucket: SeverityBucket::from_index(bucket).unwrap(),
            proximity_phrase: phrase.to_owned(),
            primary_place: place.to_owned(),
            date_text: "Mar 16, 1982".to_owned(),
            time_text: "12:00 AM".to_owned(),
            url: "u".to_owned(),
        }
    }

    #[test]
    fn palette_covers_every_tier() {
        assert_eq!(severity_color(SeverityBucket::LOWEST), "#4A7BA7");
        assert_eq!(severity_color(SeverityBucket::OVERFLOW), "#C03823");
        assert_eq!(severity_color(SeverityBucket::from_index(4).unwrap()), "#FF7D50");
    }

    #[test]
    fn table_has_one_aligned_line_per_row() {
        let rows = [
            row("7.2", 6, "88km N of ", "Yelizovo, Russia"),
            row("10.1", 9, "Near the", "Ridge"),
        ];
        let mut out = Vec::new();
        write_table(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines,
            [
                "  7.2  #E75F40  88km N of Yelizovo, Russia  Mar 16, 1982  12:00 AM",
                " 10.1  #C03823  Near the Ridge              Mar 16, 1982  12:00 AM",
            ]
        );
    }

    #[test]
    fn fallback_phrase_gets_a_space() {
        assert_eq!(join_location("Near the", "Ridge"), "Near the Ridge");
        assert_eq!(join_location("5km of ", "Reno"), "5km of Reno");
        assert_eq!(join_location("Near the", ""), "Near the");
    }

    #[test]
    fn empty_table_writes_nothing() {
        let mut out = Vec::new();
        write_table(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn json_output_round_trips() {
        let rows = vec![row("3.0", 2, "5km of ", "10km of Reno")];
        let mut out = Vec::new();
        write_json(&mut out, &rows).unwrap();
        let back: Vec<RowViewModel> = serde_json::from_slice(&out).unwrap();
        assert_eq!(back, rows);
    }
}

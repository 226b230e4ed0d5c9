//! Reading a USGS GeoJSON feed into [`EarthquakeRecord`]s.
//!
//! Only `features[].properties.{mag, place, time, url}` are read. Features
//! lacking a magnitude, place, or time are skipped with a warning; a missing
//! URL becomes an empty string.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use quakefeed_types::EarthquakeRecord;

use crate::error::ReportError;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    id: Option<String>,
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Properties {
    mag: Option<f64>,
    place: Option<String>,
    time: Option<i64>,
    url: Option<String>,
}

/// Read and parse the feed file at `path`.
pub fn load_feed(path: &Path) -> Result<Vec<EarthquakeRecord>, ReportError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ReportError::ReadFeed {
        path: path.to_path_buf(),
        source,
    })?;
    parse_feed(&contents)
}

/// Parse a GeoJSON feature collection, preserving feature order.
pub fn parse_feed(json: &str) -> Result<Vec<EarthquakeRecord>, ReportError> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    let total = collection.features.len();

    let records: Vec<_> = collection
        .features
        .into_iter()
        .filter_map(|feature| {
            let Feature { id, properties } = feature;
            match (properties.mag, properties.place, properties.time) {
                (Some(mag), Some(place), Some(time)) => Some(EarthquakeRecord::new(
                    mag,
                    place,
                    time,
                    properties.url.unwrap_or_default(),
                )),
                _ => {
                    warn!(
                        feature_id = id.as_deref().unwrap_or("<none>"),
                        "Skipping feature without magnitude, place, or time"
                    );
                    None
                }
            }
        })
        .collect();

    debug!(features = total, records = records.len(), "Feed parsed");
    Ok(records)
}

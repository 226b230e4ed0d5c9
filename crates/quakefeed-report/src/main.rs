//! Report binary for the Quakefeed presentation pipeline.
//!
//! Reads a USGS GeoJSON feed file, turns every feature into a display row,
//! and prints the rows as an aligned table or as JSON.
//!
//! # Startup Sequence
//!
//! 1. Parse command-line arguments
//! 2. Load configuration from `--config`, `./quakefeed-config.yaml`, or
//!    defaults, with `QUAKEFEED_TIMEZONE` overriding the timezone
//! 3. Initialize structured logging (tracing) at the configured level
//! 4. Apply the `--timezone` override and build the row builder
//! 5. Load the feed, build rows, skip records that fail, write the report

mod error;
mod feed;
mod render;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use quakefeed_core::{QuakefeedConfig, RowBuilder, TIMEZONE_ENV_VAR};

use crate::error::ReportError;

/// Configuration file picked up from the working directory when
/// `--config` is not given.
const DEFAULT_CONFIG_FILE: &str = "quakefeed-config.yaml";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "quakefeed-report", version, about)]
struct Args {
    /// USGS GeoJSON feed file to report on.
    #[arg(short, long)]
    input: PathBuf,

    /// YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Timezone override: `utc`, `local`, or `+HH:MM`.
    #[arg(short, long, allow_hyphen_values = true)]
    timezone: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

/// How the rows are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One aligned line per earthquake.
    Table,
    /// A JSON array of rows.
    Json,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, the feed file, or writing the report
/// fails. Individual records that cannot be formatted are logged and skipped.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let env_timezone = std::env::var(TIMEZONE_ENV_VAR).ok();
    let mut config = load_config(args.config.as_deref(), env_timezone.as_deref())?;

    // Logs go to stderr so the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("quakefeed-report starting");

    config
        .presentation
        .apply_timezone_override(args.timezone.as_deref())
        .map_err(ReportError::from)?;
    let builder = RowBuilder::new(&config.presentation).map_err(ReportError::from)?;
    info!(
        timezone = %config.presentation.timezone,
        separator = config.presentation.location_separator,
        "Configuration loaded"
    );

    let records = feed::load_feed(&args.input)?;
    let rows: Vec<_> = builder
        .build_rows(&records)
        .into_iter()
        .filter_map(Result::ok)
        .collect();
    if rows.len() < records.len() {
        warn!(
            skipped = records.len().saturating_sub(rows.len()),
            "Some records were left out of the report"
        );
    }
    info!(rows = rows.len(), input = %args.input.display(), "Rows built");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Table => render::write_table(&mut out, &rows)?,
        OutputFormat::Json => render::write_json(&mut out, &rows)?,
    }
    out.flush().map_err(ReportError::from)?;

    Ok(())
}

/// Load configuration from `path`, the working-directory default file, or
/// built-in defaults, in that order. `timezone` replaces the configured zone.
fn load_config(
    path: Option<&Path>,
    timezone: Option<&str>,
) -> Result<QuakefeedConfig, ReportError> {
    let config = match path {
        Some(path) => QuakefeedConfig::from_file_with_override(path, timezone)?,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                QuakefeedConfig::from_file_with_override(fallback, timezone)?
            } else {
                QuakefeedConfig::parse_with_override("", timezone)?
            }
        }
    };
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn format_defaults_to_table() {
        let args = Args::try_parse_from(["quakefeed-report", "--input", "feed.json"]).unwrap();
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.input, PathBuf::from("feed.json"));
        assert!(args.timezone.is_none());
    }

    #[test]
    fn all_flags_parse() {
        let args = Args::try_parse_from([
            "quakefeed-report",
            "-i",
            "feed.json",
            "-c",
            "cfg.yaml",
            "-t",
            "-08:00",
            "-f",
            "json",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.timezone.as_deref(), Some("-08:00"));
        assert_eq!(args.config, Some(PathBuf::from("cfg.yaml")));
    }

    #[test]
    fn input_is_required() {
        assert!(Args::try_parse_from(["quakefeed-report"]).is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let result = load_config(Some(Path::new("/definitely/not/here.yaml")), None);
        assert!(matches!(result, Err(ReportError::Config { .. })));
    }

    #[test]
    fn timezone_override_reaches_the_loaded_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(DEFAULT_CONFIG_FILE);
        let config = load_config(Some(&path), Some("local")).unwrap();
        assert_eq!(config.presentation.timezone.to_string(), "local");

        let result = load_config(Some(&path), Some("bogus"));
        assert!(matches!(result, Err(ReportError::Config { .. })));
    }
}

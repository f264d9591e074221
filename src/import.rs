//! Activity history import from CSV and JSON files
//!
//! The estimator does not read any store itself; callers hand it numeric
//! series. This module gives the CLI a way to gather those series from an
//! exported history file. CSV import uses flexible column mapping so that
//! exports from different trackers ("duration" vs "minutes", "hr" vs
//! "heart_rate") load without manual renaming.

use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::Activity;

/// Import errors
#[derive(Debug, Error)]
pub enum ImportError {
    /// File extension not recognized
    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },

    /// Format-specific parsing error
    #[error("Parse error in {format}: {reason}")]
    ParseError { format: String, reason: String },

    /// Required column missing from the header
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// A row field could not be interpreted
    #[error("Invalid field value in {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// Underlying IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Supported history file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Json,
}

impl ImportFormat {
    /// Detect format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("csv") => Ok(ImportFormat::Csv),
            Some("json") => Ok(ImportFormat::Json),
            other => Err(ImportError::UnsupportedFormat {
                format: other.unwrap_or("<none>").to_string(),
            }),
        }
    }
}

/// Import activities from a history file, detecting the format from the
/// file extension
pub fn import_activities(path: &Path) -> Result<Vec<Activity>, ImportError> {
    match ImportFormat::from_path(path)? {
        ImportFormat::Csv => CsvImporter::new().import(path),
        ImportFormat::Json => import_json(path),
    }
}

/// Import activities from a JSON array of activity records
pub fn import_json(path: &Path) -> Result<Vec<Activity>, ImportError> {
    let contents = fs::read_to_string(path)?;
    let activities: Vec<Activity> =
        serde_json::from_str(&contents).map_err(|e| ImportError::ParseError {
            format: "json".to_string(),
            reason: e.to_string(),
        })?;

    debug!(count = activities.len(), "imported activities from JSON");
    Ok(activities)
}

/// CSV importer with flexible column mapping
pub struct CsvImporter {
    column_mapping: HashMap<String, String>,
}

impl CsvImporter {
    pub fn new() -> Self {
        let mut column_mapping = HashMap::new();

        // Common column name variations
        Self::add_mapping(
            &mut column_mapping,
            "name",
            &["name", "activity", "workout", "title", "session"],
        );
        Self::add_mapping(
            &mut column_mapping,
            "date",
            &["date", "day", "workout_date", "session_date"],
        );
        Self::add_mapping(
            &mut column_mapping,
            "duration_minutes",
            &["duration_minutes", "duration", "minutes", "duration_min", "time_minutes"],
        );
        Self::add_mapping(
            &mut column_mapping,
            "calories",
            &["calories", "cal", "kcal", "energy"],
        );
        Self::add_mapping(
            &mut column_mapping,
            "intensity",
            &["intensity", "rpe", "effort", "perceived_effort"],
        );
        Self::add_mapping(
            &mut column_mapping,
            "heart_rate",
            &["heart_rate", "hr", "heartrate", "bpm", "avg_hr", "avg_heart_rate"],
        );
        Self::add_mapping(&mut column_mapping, "notes", &["notes", "comment", "comments"]);

        Self { column_mapping }
    }

    fn add_mapping(mapping: &mut HashMap<String, String>, standard: &str, variations: &[&str]) {
        for variation in variations {
            mapping.insert(variation.to_lowercase(), standard.to_string());
        }
    }

    /// Import activities from a CSV file
    ///
    /// Requires `date` and `duration_minutes` columns (under any mapped
    /// alias); other columns are optional. Rows with unparseable optional
    /// fields are kept with the field dropped and a warning logged.
    pub fn import(&self, path: &Path) -> Result<Vec<Activity>, ImportError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| ImportError::ParseError {
                format: "csv".to_string(),
                reason: e.to_string(),
            })?;

        // Map header positions to standard field names
        let headers = reader
            .headers()
            .map_err(|e| ImportError::ParseError {
                format: "csv".to_string(),
                reason: e.to_string(),
            })?
            .clone();

        let mut columns: HashMap<String, usize> = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            if let Some(standard) = self.column_mapping.get(&header.to_lowercase()) {
                columns.entry(standard.clone()).or_insert(index);
            }
        }

        for required in ["date", "duration_minutes"] {
            if !columns.contains_key(required) {
                return Err(ImportError::MissingColumn {
                    column: required.to_string(),
                });
            }
        }

        let mut activities = Vec::new();
        for (row_index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| ImportError::ParseError {
                format: "csv".to_string(),
                reason: format!("row {}: {}", row_index + 1, e),
            })?;

            let get = |field: &str| -> Option<&str> {
                columns
                    .get(field)
                    .and_then(|&i| record.get(i))
                    .filter(|v| !v.is_empty())
            };

            let date_str = get("date").ok_or_else(|| ImportError::InvalidField {
                field: "date".to_string(),
                reason: format!("row {} has no date", row_index + 1),
            })?;
            let date = parse_date(date_str)?;

            let duration_str =
                get("duration_minutes").ok_or_else(|| ImportError::InvalidField {
                    field: "duration_minutes".to_string(),
                    reason: format!("row {} has no duration", row_index + 1),
                })?;
            let duration_minutes =
                Decimal::from_str(duration_str).map_err(|e| ImportError::InvalidField {
                    field: "duration_minutes".to_string(),
                    reason: format!("row {}: {}", row_index + 1, e),
                })?;

            let name = get("name").unwrap_or("Workout").to_string();

            let mut activity = Activity::new(name, date, duration_minutes);
            activity.calories = get("calories").and_then(|v| parse_optional(v, "calories"));
            activity.intensity = get("intensity").and_then(|v| parse_optional(v, "intensity"));
            activity.heart_rate = get("heart_rate").and_then(|v| parse_optional(v, "heart_rate"));
            activity.notes = get("notes").map(|v| v.to_string());

            activities.push(activity);
        }

        debug!(count = activities.len(), "imported activities from CSV");
        Ok(activities)
    }
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a date in the formats trackers commonly export
fn parse_date(value: &str) -> Result<NaiveDate, ImportError> {
    for format in ["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }

    Err(ImportError::InvalidField {
        field: "date".to_string(),
        reason: format!("unrecognized date: {}", value),
    })
}

fn parse_optional<T: FromStr>(value: &str, field: &str) -> Option<T> {
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(field, value, "dropping unparseable optional field");
            None
        }
    }
}

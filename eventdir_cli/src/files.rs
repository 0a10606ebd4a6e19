use chrono::{Local, NaiveDate};
use eventdir_core::filter::parse_iso_date;
use eventdir_core::{Event, load_events_from_json, sample_events};
use std::path::Path;

use crate::errors::CliError;
use crate::ui;

/// Loads events from a JSON file, or the built-in sample when no path is given.
pub fn load_events(path: Option<&Path>) -> Result<Vec<Event>, CliError> {
    let Some(path) = path else {
        ui::debug("No events file configured, using the sample directory");
        return Ok(sample_events());
    };

    ui::debug(&format!("Reading events from '{}'", path.display()));
    let source = std::fs::read_to_string(path).map_err(|e| {
        ui::error_with_details(
            &format!("Failed to read '{}'", path.display()),
            &e.to_string(),
        );
        CliError::FileError
    })?;

    load_events_from_json(&source).map_err(|e| {
        ui::error_with_details(
            &format!("Failed to load events from '{}'", path.display()),
            &e.to_string(),
        );
        CliError::ParseError
    })
}

/// The date weekends are computed from: the override if given, otherwise the
/// local calendar date.
pub fn resolve_today(override_date: Option<&str>) -> Result<NaiveDate, CliError> {
    match override_date {
        None => Ok(Local::now().date_naive()),
        Some(value) => parse_iso_date(value.trim()).ok_or_else(|| {
            ui::error(&format!(
                "Invalid date '{}' for today. Expected YYYY-MM-DD",
                value
            ));
            CliError::InputError
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_sample_without_path() {
        let events = load_events(None).unwrap();
        assert_eq!(events, sample_events());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.json");
        let events = &sample_events()[..2];
        fs::write(&path, serde_json::to_string(events).unwrap()).unwrap();

        let loaded = load_events(Some(&path)).unwrap();
        assert_eq!(loaded, events.to_vec());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        assert_matches!(load_events(Some(&path)), Err(CliError::FileError));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.json");
        fs::write(&path, "[{\"id\": 1}]").unwrap();

        assert_matches!(load_events(Some(&path)), Err(CliError::ParseError));
    }

    #[test]
    fn test_resolve_today_override() {
        assert_eq!(
            resolve_today(Some("2025-07-09")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 9).unwrap()
        );
    }

    #[test]
    fn test_resolve_today_invalid_override() {
        assert_matches!(resolve_today(Some("tomorrow")), Err(CliError::InputError));
    }

    #[test]
    fn test_resolve_today_defaults_to_local_date() {
        assert!(resolve_today(None).is_ok());
    }
}

//! Config validation: checks every field and collects errors and warnings.

use crate::schema::DaylogConfig;
use daylog::template::unknown_tokens;
use daylog::{DateFormat, Severity};
use thiserror::Error;

/// A config validation finding with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &DaylogConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_level(config, &mut report);
    validate_timestamp(config, &mut report);
    validate_format(config, &mut report);
    validate_directory(config, &mut report);
    report
}

fn validate_level(config: &DaylogConfig, report: &mut ValidationReport) {
    let Some(level) = &config.level else { return };
    if level.parse::<Severity>().is_err() {
        report.error(
            "level",
            format!(
                "Unknown level '{level}'. Use one of: emergency, alert, critical, error, warning, notice, info, debug"
            ),
        );
    }
}

fn validate_timestamp(config: &DaylogConfig, report: &mut ValidationReport) {
    let Some(pattern) = &config.timestamp else { return };
    if DateFormat::new(pattern.as_str()).is_err() {
        report.error("timestamp", format!("'{pattern}' is not a valid strftime pattern"));
    }
}

fn validate_format(config: &DaylogConfig, report: &mut ValidationReport) {
    let Some(format) = &config.format else { return };
    for token in unknown_tokens(format) {
        report.warn("format", format!("Unknown placeholder {token} will be written as-is"));
    }
}

fn validate_directory(config: &DaylogConfig, report: &mut ValidationReport) {
    match config.directory.as_deref() {
        None | Some("") => report.warn(
            "directory",
            "No log directory configured; the first log call will fail",
        ),
        Some(dir) if std::path::Path::new(dir).is_file() => {
            report.error("directory", format!("'{dir}' exists and is not a directory"));
        }
        Some(_) => {}
    }
}

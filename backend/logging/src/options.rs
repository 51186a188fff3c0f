use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::formatter::Formatter;
use crate::level::Severity;
use crate::template::Template;
use crate::timestamp::DateFormat;

/// Construction options for a [`Logger`](crate::Logger).
///
/// Unset fields fall back to defaults: threshold `debug`, timestamp
/// `%Y-%m-%d %H:%M:%S%.6f`, template `%timestamp% %level% %message%`. An empty
/// timestamp also means the default, while an empty format selects the plain
/// `[timestamp] [LEVEL] message` layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Severity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_timestamp(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp = Some(pattern.into());
        self
    }

    pub fn with_format(mut self, template: impl Into<String>) -> Self {
        self.format = Some(template.into());
        self
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Builds the formatter these options describe.
    pub fn formatter(&self) -> Result<Formatter> {
        let date_format = match self.timestamp.as_deref() {
            None | Some("") => DateFormat::default(),
            Some(pattern) => DateFormat::new(pattern)?,
        };
        let template = self
            .format
            .as_deref()
            .map_or_else(Template::default, Template::new);
        Ok(Formatter::new(
            self.level.unwrap_or_default(),
            template,
            date_format,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogError;
    use crate::template::DEFAULT_FORMAT;
    use crate::timestamp::DEFAULT_DATE_FORMAT;

    #[test]
    fn defaults() {
        let formatter = LoggerOptions::new().formatter().unwrap();
        assert_eq!(formatter.threshold(), Severity::Debug);
        assert_eq!(formatter.template().as_str(), DEFAULT_FORMAT);
        assert_eq!(formatter.date_format().as_str(), DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn empty_timestamp_means_default_but_empty_format_means_plain() {
        let formatter = LoggerOptions::new()
            .with_timestamp("")
            .with_format("")
            .formatter()
            .unwrap();
        assert_eq!(formatter.date_format().as_str(), DEFAULT_DATE_FORMAT);
        assert!(formatter.template().is_plain());
    }

    #[test]
    fn bad_timestamp_is_rejected() {
        let err = LoggerOptions::new().with_timestamp("%").formatter().unwrap_err();
        assert!(matches!(err, LogError::InvalidDateFormat(_)));
    }

    #[test]
    fn deserializes_camel_case() {
        let options: LoggerOptions = serde_json::from_value(serde_json::json!({
            "level": "error",
            "format": "%level% %message%",
            "directory": "/var/log/app"
        }))
        .unwrap();
        assert_eq!(options.level, Some(Severity::Error));
        assert_eq!(options.directory, Some(PathBuf::from("/var/log/app")));
        assert!(options.timestamp.is_none());
    }
}

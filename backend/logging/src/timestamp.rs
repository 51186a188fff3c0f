use std::fmt::Write;
use std::sync::Arc;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local};

use crate::error::{LogError, Result};

/// `YYYY-MM-DD HH:MM:SS.ffffff`
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A chrono strftime pattern, checked when it is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LogError::InvalidDateFormat(pattern));
        }
        Ok(Self(pattern))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self, at: &DateTime<FixedOffset>) -> Result<String> {
        let mut out = String::new();
        write!(out, "{}", at.format(&self.0))
            .map_err(|_| LogError::InvalidDateFormat(self.0.clone()))?;
        Ok(out)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(DEFAULT_DATE_FORMAT.to_string())
    }
}

/// Wall-clock time in the local zone, sub-second precision intact.
pub fn now() -> DateTime<FixedOffset> {
    Local::now().into()
}

/// Source of "now" shared by a logger and its file sink, so an entry's
/// timestamp and the file it lands in agree on the day.
pub type Clock = Arc<dyn Fn() -> DateTime<FixedOffset> + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use regex::Regex;

    fn fixed() -> DateTime<FixedOffset> {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_micro_opt(7, 8, 9, 42)
            .unwrap()
            .and_utc()
            .into()
    }

    #[test]
    fn default_keeps_microseconds() {
        let out = DateFormat::default().render(&fixed()).unwrap();
        assert_eq!(out, "2024-03-05 07:08:09.000042");
    }

    #[test]
    fn custom_pattern() {
        let format = DateFormat::new("%m-%d-%Y %-H:%M:%S").unwrap();
        assert_eq!(format.render(&fixed()).unwrap(), "03-05-2024 7:08:09");
    }

    #[test]
    fn rejects_dangling_specifier() {
        let err = DateFormat::new("%Y-%").unwrap_err();
        assert!(matches!(err, LogError::InvalidDateFormat(ref p) if p == "%Y-%"));
    }

    #[test]
    fn live_clock_matches_default_shape() {
        let shape = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{6}$").unwrap();
        let out = DateFormat::default().render(&now()).unwrap();
        assert!(shape.is_match(&out), "unexpected timestamp {out}");
    }
}

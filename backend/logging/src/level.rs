//! Severity levels and threshold comparison.
//!
//! Ranks run from 0 (`emergency`) to 7 (`debug`). A threshold names the least
//! severe level that is still recorded, so `emergency` passes every threshold
//! and `debug` only passes a `debug` threshold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LogError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    #[default]
    Debug = 7,
}

/// Every severity, most severe first. Index equals rank.
pub const SEVERITIES: [Severity; 8] = [
    Severity::Emergency,
    Severity::Alert,
    Severity::Critical,
    Severity::Error,
    Severity::Warning,
    Severity::Notice,
    Severity::Info,
    Severity::Debug,
];

const NAMES: [&str; 8] = [
    "emergency",
    "alert",
    "critical",
    "error",
    "warning",
    "notice",
    "info",
    "debug",
];

impl Severity {
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Lower-case name, as accepted in configuration.
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Upper-case label written into log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Emergency => "EMERGENCY",
            Self::Alert => "ALERT",
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Notice => "NOTICE",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Whether a call at this severity is recorded under `threshold`.
    pub const fn is_enabled(self, threshold: Severity) -> bool {
        self.rank() <= threshold.rank()
    }
}

/// Rank of a severity given by name.
pub fn rank_of(name: &str) -> Result<u8> {
    name.parse::<Severity>().map(Severity::rank)
}

pub fn is_enabled(severity: Severity, threshold: Severity) -> bool {
    severity.is_enabled(threshold)
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(s))
            .map(|rank| SEVERITIES[rank])
            .ok_or_else(|| LogError::InvalidSeverity(s.to_string()))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_table_order() {
        for (rank, severity) in SEVERITIES.iter().enumerate() {
            assert_eq!(severity.rank() as usize, rank);
            assert_eq!(rank_of(severity.name()).unwrap() as usize, rank);
        }
    }

    #[test]
    fn error_threshold_enables_only_more_severe() {
        let threshold = Severity::Error;
        let enabled: Vec<_> = SEVERITIES
            .iter()
            .filter(|s| is_enabled(**s, threshold))
            .map(|s| s.name())
            .collect();
        assert_eq!(enabled, ["emergency", "alert", "critical", "error"]);
    }

    #[test]
    fn emergency_passes_every_threshold() {
        for threshold in SEVERITIES {
            assert!(Severity::Emergency.is_enabled(threshold));
        }
        assert!(Severity::Debug.is_enabled(Severity::Debug));
        assert!(!Severity::Debug.is_enabled(Severity::Info));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = rank_of("verbose").unwrap_err();
        assert!(matches!(err, LogError::InvalidSeverity(ref name) if name == "verbose"));
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warning);
    }

    #[test]
    fn deserializes_from_name() {
        let level: Severity = serde_json::from_str("\"notice\"").unwrap();
        assert_eq!(level, Severity::Notice);
        assert!(serde_json::from_str::<Severity>("\"loud\"").is_err());
        assert_eq!(serde_json::to_string(&Severity::Alert).unwrap(), "\"alert\"");
    }
}

//! Config defaults: fills in values the file and overrides left unset.

use crate::schema::DaylogConfig;
use daylog::{Severity, DEFAULT_DATE_FORMAT, DEFAULT_FORMAT};

/// Threshold used when none is configured: record everything.
pub const DEFAULT_LEVEL: Severity = Severity::Debug;

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: DaylogConfig) -> DaylogConfig {
    let config = apply_level_default(config);
    let config = apply_timestamp_default(config);
    apply_format_default(config)
}

fn apply_level_default(mut config: DaylogConfig) -> DaylogConfig {
    if config.level.as_deref().map(str::is_empty).unwrap_or(true) {
        config.level = Some(DEFAULT_LEVEL.name().to_string());
    }
    config
}

/// An empty timestamp pattern counts as unset.
fn apply_timestamp_default(mut config: DaylogConfig) -> DaylogConfig {
    if config.timestamp.as_deref().map(str::is_empty).unwrap_or(true) {
        config.timestamp = Some(DEFAULT_DATE_FORMAT.to_string());
    }
    config
}

/// An explicitly empty format is kept: it selects the plain layout.
fn apply_format_default(mut config: DaylogConfig) -> DaylogConfig {
    if config.format.is_none() {
        config.format = Some(DEFAULT_FORMAT.to_string());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_empty_config() {
        let cfg = apply_all_defaults(DaylogConfig::default());
        assert_eq!(cfg.level.as_deref(), Some("debug"));
        assert_eq!(cfg.timestamp.as_deref(), Some(DEFAULT_DATE_FORMAT));
        assert_eq!(cfg.format.as_deref(), Some(DEFAULT_FORMAT));
        assert!(cfg.directory.is_none());
    }

    #[test]
    fn keeps_user_values_and_empty_format() {
        let cfg = DaylogConfig {
            level: Some("error".into()),
            timestamp: Some(String::new()),
            format: Some(String::new()),
            directory: Some("/var/log/app".into()),
        };
        let cfg = apply_all_defaults(cfg);
        assert_eq!(cfg.level.as_deref(), Some("error"));
        assert_eq!(cfg.timestamp.as_deref(), Some(DEFAULT_DATE_FORMAT));
        assert_eq!(cfg.format.as_deref(), Some(""));
    }
}

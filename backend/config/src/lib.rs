//! Configuration for daylog loggers.
//!
//! Provides:
//! - Typed config schema (`level`, `timestamp`, `format`, `directory`)
//! - YAML loading from `~/.daylog/config.yaml` or an explicit path
//! - `${ENV_VAR}` substitution and `DAYLOG_*` overrides
//! - JSON merge-patch overrides (used for command-line flags)
//! - Default value application
//! - Validation with errors and warnings

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

pub use defaults::apply_all_defaults;
pub use env::{
    apply_env_overrides_with, collect_referenced_vars, resolve_env_vars_with, MissingEnvVarError,
};
pub use io::{apply_merge_patch, config_dir, config_file_path, load_config_value};
pub use schema::DaylogConfig;
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{bail, Context, Result};
use daylog::LoggerOptions;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// A loaded config together with its validation findings.
#[derive(Debug)]
pub struct PreparedConfig {
    pub config: DaylogConfig,
    pub report: ValidationReport,
}

impl PreparedConfig {
    /// Logger options, or an error listing every validation failure.
    pub fn into_options(self) -> Result<LoggerOptions> {
        if !self.report.is_valid() {
            let errors: Vec<String> = self.report.errors.iter().map(ToString::to_string).collect();
            bail!("Invalid configuration:\n  {}", errors.join("\n  "));
        }
        self.config.to_options()
    }
}

/// Load, substitute env vars, apply overrides and defaults, then validate.
///
/// `patch` is merged last, after the `DAYLOG_*` environment overrides.
pub fn load_and_prepare(path: &Path, patch: Option<&Value>) -> Result<PreparedConfig> {
    let raw = load_config_value(path)?;
    prepare_value(raw, &std::env::vars().collect(), patch)
}

/// The pipeline behind [`load_and_prepare`], with an explicit environment.
pub fn prepare_value(
    raw: Value,
    env: &HashMap<String, String>,
    patch: Option<&Value>,
) -> Result<PreparedConfig> {
    let referenced = collect_referenced_vars(&raw);
    if !referenced.is_empty() {
        tracing::debug!(vars = ?referenced, "Resolving env var references in config");
    }

    let value = resolve_env_vars_with(&raw, env).context("Failed to resolve env vars in config")?;
    let value = apply_env_overrides_with(value, env);
    let value = match patch {
        Some(patch) => apply_merge_patch(value, patch),
        None => value,
    };

    let config: DaylogConfig =
        serde_json::from_value(value).context("Failed to deserialize config")?;
    let config = apply_all_defaults(config);

    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }

    Ok(PreparedConfig { config, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use daylog::Severity;
    use serde_json::json;
    use std::path::PathBuf;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn layers_file_env_and_patch() {
        let raw = json!({"level": "info", "directory": "${APP_HOME}/logs", "format": "%message%"});
        let patch = json!({"format": "%level% %message%"});
        let prepared = prepare_value(
            raw,
            &env(&[("APP_HOME", "/opt/app"), ("DAYLOG_LEVEL", "warning")]),
            Some(&patch),
        )
        .unwrap();
        assert!(prepared.report.is_valid());

        let options = prepared.into_options().unwrap();
        assert_eq!(options.level, Some(Severity::Warning));
        assert_eq!(options.directory, Some(PathBuf::from("/opt/app/logs")));
        assert_eq!(options.format.as_deref(), Some("%level% %message%"));
        assert_eq!(options.timestamp.as_deref(), Some(daylog::DEFAULT_DATE_FORMAT));
    }

    #[test]
    fn invalid_config_refuses_options() {
        let prepared = prepare_value(json!({"level": "loud"}), &HashMap::new(), None).unwrap();
        assert!(!prepared.report.is_valid());
        let err = prepared.into_options().unwrap_err();
        assert!(err.to_string().contains("level"));
    }

    #[test]
    fn non_string_level_fails_to_deserialize() {
        let result = prepare_value(json!({"level": 3}), &HashMap::new(), None);
        assert!(result.is_err());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file_path(dir.path());
        std::fs::write(&path, "level: critical\nformat: \"\"\ndirectory: logs\n").unwrap();
        let options = load_and_prepare(&path, None).unwrap().into_options().unwrap();
        assert_eq!(options.level, Some(Severity::Critical));
        assert_eq!(options.format.as_deref(), Some(""));
    }
}

//! daylog configuration schema.
//!
//! Fields stay as raw strings so that validation can report every problem at
//! once instead of failing on the first bad value during deserialization.

use std::path::PathBuf;

use anyhow::{Context, Result};
use daylog::{LoggerOptions, Severity};
use serde::{Deserialize, Serialize};

/// Root configuration file (`config.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaylogConfig {
    /// Threshold: emergency, alert, critical, error, warning, notice, info, debug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// chrono strftime pattern for `%timestamp%`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Line template; empty selects `[timestamp] [LEVEL] message`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Directory holding the `Log_YYYY-MM-DD.txt` files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

impl DaylogConfig {
    /// Converts to logger options. Assumes the config has been validated.
    pub fn to_options(&self) -> Result<LoggerOptions> {
        let level = self
            .level
            .as_deref()
            .map(str::parse::<Severity>)
            .transpose()
            .with_context(|| format!("Invalid level in config: {:?}", self.level))?;

        Ok(LoggerOptions {
            level,
            timestamp: self.timestamp.clone(),
            format: self.format.clone(),
            directory: self
                .directory
                .as_deref()
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        })
    }
}

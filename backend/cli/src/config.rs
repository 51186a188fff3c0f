use std::path::PathBuf;

/// Settings for the `daylog` binary itself, as opposed to the logger it drives.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Filter for the tool's own diagnostics on stderr (overridden by `RUST_LOG`)
    pub diagnostics_level: String,
    /// Config file used when `--config` is not given
    pub config_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            diagnostics_level: "warn".to_string(),
            config_path: None,
        }
    }
}

impl Settings {
    /// Load settings from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            diagnostics_level: std::env::var("DAYLOG_DIAGNOSTICS")
                .unwrap_or_else(|_| "warn".to_string()),
            config_path: std::env::var("DAYLOG_CONFIG").ok().map(PathBuf::from),
        }
    }
}

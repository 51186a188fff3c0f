//! Config file location, loading and merge-patch overrides.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default config file name within the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolve the daylog config directory.
/// Priority: `DAYLOG_CONFIG_DIR` env > `~/.daylog/`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DAYLOG_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".daylog"),
        None => PathBuf::from(".daylog"),
    }
}

/// Resolve the full path to the main config file.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Load the config file as a raw value tree.
///
/// Returns an empty object if the file doesn't exist, or if it is empty.
pub fn load_config_value(path: &Path) -> Result<Value> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let value: Value = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded config");
    Ok(match value {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    })
}

/// Patch a config value with a JSON Merge Patch (RFC 7396).
pub fn apply_merge_patch(mut value: Value, patch: &Value) -> Value {
    json_merge_patch(&mut value, patch);
    value
}

fn json_merge_patch(target: &mut Value, patch: &Value) {
    if let Value::Object(patch_map) = patch {
        if let Value::Object(target_map) = target {
            for (key, patch_val) in patch_map {
                if patch_val.is_null() {
                    target_map.remove(key);
                } else {
                    let entry = target_map.entry(key.clone()).or_insert(Value::Null);
                    json_merge_patch(entry, patch_val);
                }
            }
        } else {
            // Non-object target is replaced.
            *target = Value::Object(serde_json::Map::new());
            json_merge_patch(target, patch);
        }
    } else {
        // Scalar or array patch replaces the target.
        *target = patch.clone();
    }
}

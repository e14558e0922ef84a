use super::{Config, KNOWN_KEYS};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Documentation injected right after the `depth_policy` line.
const DEPTH_POLICY_DOC: &str = "# depth_policy options:\n\
                                #   strict → a Depth From edit must stay below Depth To\n\
                                #   legacy → only Depth To edits are checked against Depth From\n";

fn default_value_for(key: &str) -> AppResult<Value> {
    let defaults = serde_yaml::to_value(Config::default())?;
    defaults
        .get(key)
        .cloned()
        .ok_or_else(|| AppError::Config(format!("no default for key '{}'", key)))
}

/// Add every missing key to the YAML configuration file, using the default value.
/// Existing keys are never touched. Returns the keys that were added.
pub fn fill_missing_keys(conf_file: &Path) -> AppResult<Vec<String>> {
    if !conf_file.exists() {
        info(format!(
            "No configuration file at {}, nothing to migrate.",
            conf_file.display()
        ));
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(conf_file)?;
    let mut yaml: Value = serde_yaml::from_str(&content)?;

    let map = yaml.as_mapping_mut().ok_or_else(|| {
        AppError::Config(format!("{} is not a YAML mapping", conf_file.display()))
    })?;

    let mut added = Vec::new();
    for key in KNOWN_KEYS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            map.insert(k, default_value_for(key)?);
            added.push(key.to_string());
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&yaml)?;

    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if line.starts_with("depth_policy:") && added.iter().any(|k| k == "depth_policy") {
            new_content.push_str(DEPTH_POLICY_DOC);
        }
    }

    fs::write(conf_file, new_content)?;

    success(format!(
        "Configuration migrated: added {}",
        added.join(", ")
    ));

    Ok(added)
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use sentinel_core::{CoreError, SentinelSettings};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    NotFound(String),
    #[error("unsupported configuration format for {0}; expected one of: json, yaml, yml")]
    UnsupportedExtension(String),
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration root must be a mapping object")]
    NotAMapping,
    #[error("failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid sentinel configuration: {0}")]
    Invalid(#[from] CoreError),
}

/// Load `SentinelSettings` from `config_path`. `None` returns the defaults.
///
/// Supports `.yaml`/`.yml`/`.json`. A top-level `sentinel:` key is unwrapped
/// if present; otherwise the whole document is treated as the sentinel
/// section.
pub fn load_settings(config_path: Option<&Path>) -> Result<SentinelSettings, ConfigError> {
    let Some(path) = config_path else {
        tracing::debug!("no config path supplied, using default SentinelSettings");
        return Ok(SentinelSettings::default());
    };

    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let document = read_mapping(path)?;
    let sentinel_section = document
        .get("sentinel")
        .cloned()
        .unwrap_or(document);

    if !sentinel_section.is_object() && !sentinel_section.is_null() {
        return Err(ConfigError::NotAMapping);
    }

    let settings: SentinelSettings = serde_json::from_value(sentinel_section)?;
    settings.validate()?;

    tracing::debug!(
        incident_cards = settings.incident_cards.len(),
        queue_size = settings.dispatcher.queue_size,
        "loaded sentinel configuration"
    );
    Ok(settings)
}

fn read_mapping(path: &Path) -> Result<serde_json::Value, ConfigError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if !matches!(extension.as_str(), "yaml" | "yml" | "json") {
        return Err(ConfigError::UnsupportedExtension(
            path.display().to_string(),
        ));
    }

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let value: serde_json::Value = if extension == "json" {
        if text.trim().is_empty() {
            serde_json::Value::Object(Default::default())
        } else {
            serde_json::from_str(&text)?
        }
    } else {
        serde_yaml::from_str(&text)?
    };

    if !value.is_object() {
        return Err(ConfigError::NotAMapping);
    }
    Ok(value)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

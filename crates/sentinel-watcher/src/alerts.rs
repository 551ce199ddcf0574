// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::BTreeMap;

use sentinel_core::{Resource, ResourceDefinition};
use serde::Deserialize;
use serde_json::Value;

/// Expected shape: `{ "data": { "alerts": [ {labels, annotations, status,
/// startsAt|activeAt, value?}, … ] } }`. Any deviation yields an empty list
/// rather than an error.
#[derive(Debug, Deserialize)]
pub struct AlertsResponse {
    #[serde(default)]
    pub data: Option<AlertsData>,
}

#[derive(Debug, Deserialize)]
pub struct AlertsData {
    #[serde(default)]
    pub alerts: Option<Vec<Alert>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(rename = "startsAt", default)]
    pub starts_at: Option<String>,
    #[serde(rename = "activeAt", default)]
    pub active_at: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl AlertsResponse {
    pub fn into_alerts(self) -> Vec<Alert> {
        self.data.and_then(|d| d.alerts).unwrap_or_default()
    }
}

impl Alert {
    /// Build the `Resource` this alert yields under `definition`.
    pub fn to_resource(&self, definition: &ResourceDefinition) -> Resource {
        let mut annotations = definition.annotations.clone();
        annotations.extend(self.annotations.clone());

        Resource {
            resource_type: definition.resource_type.clone(),
            name: definition.name.clone(),
            labels: self.labels.clone(),
            annotations,
            state: self.state(),
            value: self.value.as_ref().map(scalar_to_string),
            timestamp: self.starts_at.clone().or_else(|| self.active_at.clone()),
        }
    }

    fn state(&self) -> Option<String> {
        match &self.status {
            Some(Value::Object(map)) => map
                .get("state")
                .or_else(|| map.get("value"))
                .map(scalar_to_string),
            Some(scalar) => Some(scalar_to_string(scalar)),
            None => None,
        }
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "alerts_tests.rs"]
mod tests;

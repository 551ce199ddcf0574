// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The triggering entity for an incident, and the declarative selector
//! watchers use to recognise one from raw alert data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The routing identity derived from an alert.
///
/// `(type, name)` is the routing identity; `labels`/`annotations` are opaque
/// metadata carried along for prompt context and audit payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Resource {
    /// A deterministic dedup key independent of label/annotation insertion
    /// order: `type | name | sorted labels | sorted annotations | timestamp?`,
    /// skipping any empty segment.
    pub fn dedupe_key(&self) -> String {
        let labels = join_pairs(&self.labels);
        let annotations = join_pairs(&self.annotations);

        let mut parts = vec![
            self.resource_type.as_str(),
            self.name.as_str(),
            labels.as_str(),
            annotations.as_str(),
        ];
        if let Some(ts) = self.timestamp.as_deref() {
            parts.push(ts);
        }
        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("|")
    }
}

fn join_pairs(map: &BTreeMap<String, String>) -> String {
    map.iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Declarative selector used by watchers to recognise a `Resource` from raw
/// alert labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDefinition {
    pub name: String,
    #[serde(default = "default_resource_type")]
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
}

fn default_resource_type() -> String {
    "prometheus_alert".to_string()
}

impl ResourceDefinition {
    /// Build a synthetic definition for an unmatched watcher reference,
    /// filtering on `alertname == name`.
    pub fn synthetic_alertname(name: &str) -> Self {
        let mut filters = BTreeMap::new();
        filters.insert("alertname".to_string(), name.to_string());
        Self {
            name: name.to_string(),
            resource_type: default_resource_type(),
            filters,
            annotations: BTreeMap::new(),
        }
    }

    /// `true` iff every filter entry matches the corresponding label
    /// verbatim. An empty filter set matches all labels.
    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        self.filters
            .iter()
            .all(|(k, v)| labels.get(k).map(|lv| lv == v).unwrap_or(false))
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::BTreeMap;

use sentinel_core::IncidentNotification;

/// Build the placeholder context used by `PromptRenderer`.
pub fn build_context(notification: &IncidentNotification) -> BTreeMap<String, String> {
    let resource = &notification.resource;
    let mut ctx = BTreeMap::new();
    ctx.insert("resource_name".to_string(), resource.name.clone());
    ctx.insert("resource_type".to_string(), resource.resource_type.clone());
    ctx.insert(
        "resource_state".to_string(),
        resource.state.clone().unwrap_or_else(|| "unknown".to_string()),
    );
    ctx.insert(
        "resource_value".to_string(),
        resource.value.clone().unwrap_or_default(),
    );
    ctx.insert(
        "resource_timestamp".to_string(),
        resource.timestamp.clone().unwrap_or_default(),
    );
    ctx.insert("resource_labels".to_string(), join_pairs(&resource.labels));
    ctx.insert(
        "resource_annotations".to_string(),
        join_pairs(&resource.annotations),
    );
    ctx
}

fn join_pairs(map: &BTreeMap<String, String>) -> String {
    map.iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the newline-joined plaintext initial agent input.
pub fn build_initial_input(notification: &IncidentNotification) -> String {
    let resource = &notification.resource;
    let mut lines = vec![
        format!(
            "Incident resource {} ({})",
            resource.name, resource.resource_type
        ),
        format!(
            "State: {} | Value: {}",
            resource.state.as_deref().unwrap_or("unknown"),
            resource.value.as_deref().unwrap_or("")
        ),
    ];

    if !resource.labels.is_empty() {
        lines.push(format!("Labels: {}", join_pairs(&resource.labels)));
    }
    if !resource.annotations.is_empty() {
        lines.push(format!(
            "Annotations: {}",
            join_pairs(&resource.annotations)
        ));
    }
    if !is_empty_payload(&notification.raw_payload) {
        let dumped = notification.raw_payload.to_string();
        lines.push(format!("Raw payload: {}", truncate_chars(&dumped, 480)));
    }

    lines.join("\n")
}

fn is_empty_payload(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

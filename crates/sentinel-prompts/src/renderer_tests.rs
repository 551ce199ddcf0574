// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sentinel_core::Resource;
use std::collections::BTreeMap;

fn notification() -> IncidentNotification {
    let mut labels = BTreeMap::new();
    labels.insert("severity".to_string(), "critical".to_string());
    IncidentNotification::new(
        Resource {
            resource_type: "prometheus_alert".to_string(),
            name: "web-tier".to_string(),
            labels,
            annotations: BTreeMap::new(),
            state: Some("firing".to_string()),
            value: Some("0.98".to_string()),
            timestamp: None,
        },
        serde_json::Value::Null,
    )
}

#[test]
fn substitutes_known_placeholders() {
    let renderer = PromptRenderer::new();
    let rendered = renderer.render(
        "Resource ${resource_name} is ${resource_state} (value=${resource_value})",
        &notification(),
    );
    assert_eq!(rendered, "Resource web-tier is firing (value=0.98)");
}

#[test]
fn unknown_placeholder_renders_empty() {
    let renderer = PromptRenderer::new();
    let rendered = renderer.render("Owner: ${owner_team}", &notification());
    assert_eq!(rendered, "Owner: ");
}

#[test]
fn malformed_placeholder_falls_back_to_raw_template() {
    let renderer = PromptRenderer::new();
    let template = "Unterminated ${resource_name";
    let rendered = renderer.render(template, &notification());
    assert_eq!(rendered, template);
}

#[test]
fn labels_render_as_comma_joined_pairs() {
    let renderer = PromptRenderer::new();
    let rendered = renderer.render("${resource_labels}", &notification());
    assert_eq!(rendered, "severity=critical");
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sentinel_core::Resource;

fn notification(state: Option<&str>) -> IncidentNotification {
    IncidentNotification::new(
        Resource {
            resource_type: "prometheus_alert".to_string(),
            name: "web-tier".to_string(),
            labels: BTreeMap::new(),
            annotations: BTreeMap::new(),
            state: state.map(|s| s.to_string()),
            value: None,
            timestamp: None,
        },
        serde_json::Value::Null,
    )
}

#[test]
fn missing_state_renders_as_unknown() {
    let ctx = build_context(&notification(None));
    assert_eq!(ctx["resource_state"], "unknown");
}

#[test]
fn initial_input_omits_empty_sections() {
    let input = build_initial_input(&notification(Some("firing")));
    assert!(!input.contains("Labels:"));
    assert!(!input.contains("Raw payload:"));
    assert!(input.contains("Incident resource web-tier (prometheus_alert)"));
    assert!(input.contains("State: firing | Value:"));
}

#[test]
fn raw_payload_included_and_truncated() {
    let mut n = notification(Some("firing"));
    n.raw_payload = serde_json::json!({"x": "y".repeat(1000)});
    let input = build_initial_input(&n);
    let payload_line = input.lines().find(|l| l.starts_with("Raw payload:")).unwrap();
    assert!(payload_line.len() <= 500);
    assert!(payload_line.ends_with("..."));
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn definition() -> ResourceDefinition {
    ResourceDefinition {
        name: "web-tier".to_string(),
        resource_type: "prometheus_alert".to_string(),
        filters: BTreeMap::new(),
        annotations: {
            let mut m = BTreeMap::new();
            m.insert("runbook".to_string(), "default".to_string());
            m
        },
    }
}

#[test]
fn unexpected_top_level_shape_yields_empty_alerts() {
    let decoded: AlertsResponse = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(decoded.into_alerts().is_empty());
}

#[test]
fn object_status_prefers_state_over_value() {
    let alert = Alert {
        labels: BTreeMap::new(),
        annotations: BTreeMap::new(),
        status: Some(serde_json::json!({"state": "firing", "value": "1"})),
        starts_at: None,
        active_at: None,
        value: None,
    };
    assert_eq!(alert.state().as_deref(), Some("firing"));
}

#[test]
fn scalar_status_is_used_directly() {
    let alert = Alert {
        labels: BTreeMap::new(),
        annotations: BTreeMap::new(),
        status: Some(serde_json::json!("firing")),
        starts_at: None,
        active_at: None,
        value: None,
    };
    assert_eq!(alert.state().as_deref(), Some("firing"));
}

#[test]
fn alert_annotations_override_definition_defaults() {
    let mut labels = BTreeMap::new();
    labels.insert("severity".to_string(), "critical".to_string());
    let mut annotations = BTreeMap::new();
    annotations.insert("runbook".to_string(), "override".to_string());
    let alert = Alert {
        labels,
        annotations,
        status: None,
        starts_at: Some("2026-01-01T00:00:00Z".to_string()),
        active_at: None,
        value: Some(serde_json::json!(0.97)),
    };
    let resource = alert.to_resource(&definition());
    assert_eq!(resource.annotations.get("runbook"), Some(&"override".to_string()));
    assert_eq!(resource.value.as_deref(), Some("0.97"));
    assert_eq!(resource.timestamp.as_deref(), Some("2026-01-01T00:00:00Z"));
}

#[test]
fn starts_at_takes_priority_over_active_at() {
    let alert = Alert {
        labels: BTreeMap::new(),
        annotations: BTreeMap::new(),
        status: None,
        starts_at: Some("starts".to_string()),
        active_at: Some("active".to_string()),
        value: None,
    };
    let resource = alert.to_resource(&definition());
    assert_eq!(resource.timestamp.as_deref(), Some("starts"));
}

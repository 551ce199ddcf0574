// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers building the two standard lifecycle events.

use sentinel_core::{IncidentCard, IncidentNotification, SinkEvent};
use serde_json::Value;

pub fn incident_start_event(card: &IncidentCard, notification: &IncidentNotification) -> SinkEvent {
    let resource = &notification.resource;
    let payload = serde_json::json!({
        "state": resource.state,
        "value": resource.value,
        "labels": resource.labels,
        "annotations": resource.annotations,
    });
    SinkEvent::new(
        "incident.started",
        card.name.clone(),
        resource.name.clone(),
        "Incident processing started",
        payload,
    )
}

pub fn incident_completion_event(
    card: &IncidentCard,
    notification: &IncidentNotification,
    outcome: &str,
    result_payload: Value,
) -> SinkEvent {
    let resource = &notification.resource;
    let message = if outcome == "success" {
        "Incident processing completed"
    } else {
        "Incident processing failed"
    };
    SinkEvent::new(
        format!("incident.{outcome}"),
        card.name.clone(),
        resource.name.clone(),
        message,
        result_payload,
    )
}

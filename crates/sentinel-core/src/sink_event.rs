// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Immutable lifecycle event emitted to sinks.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct SinkEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub card_name: String,
    pub resource_name: String,
    pub message: String,
    pub payload: Value,
}

impl SinkEvent {
    pub fn new(
        event_type: impl Into<String>,
        card_name: impl Into<String>,
        resource_name: impl Into<String>,
        message: impl Into<String>,
        payload: Value,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            card_name: card_name.into(),
            resource_name: resource_name.into(),
            message: message.into(),
            payload,
        }
    }
}

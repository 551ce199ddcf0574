// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notifications produced by a watcher and consumed by the dispatcher and
//! orchestrator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resource::Resource;

/// One detected alert activation, wrapped with the raw payload that
/// triggered it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentNotification {
    pub resource: Resource,
    #[serde(default)]
    pub raw_payload: Value,
}

impl IncidentNotification {
    pub fn new(resource: Resource, raw_payload: Value) -> Self {
        Self {
            resource,
            raw_payload,
        }
    }
}

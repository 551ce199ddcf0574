// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The synchronous admission decision returned from `Dispatcher::dispatch`.

use std::sync::Arc;

use serde::Serialize;

use crate::settings::IncidentCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatcherStatus {
    Queued,
    Duplicate,
    Dropped,
}

#[derive(Debug, Clone)]
pub struct DispatcherResult {
    pub status: DispatcherStatus,
    pub detail: Option<String>,
    pub incident_card: Option<Arc<IncidentCard>>,
}

impl DispatcherResult {
    pub fn queued(card: Arc<IncidentCard>) -> Self {
        Self {
            status: DispatcherStatus::Queued,
            detail: None,
            incident_card: Some(card),
        }
    }

    pub fn duplicate(detail: &str) -> Self {
        Self {
            status: DispatcherStatus::Duplicate,
            detail: Some(detail.to_string()),
            incident_card: None,
        }
    }

    pub fn dropped(detail: &str) -> Self {
        Self {
            status: DispatcherStatus::Dropped,
            detail: Some(detail.to_string()),
            incident_card: None,
        }
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test-support fake sink, mirroring `oj-adapters`'s `Fake*Adapter` convention.

use parking_lot::Mutex;
use sentinel_core::SinkEvent;

use crate::Sink;

#[derive(Debug, Clone)]
pub struct SinkCall {
    pub event_type: String,
    pub card_name: String,
    pub resource_name: String,
}

#[derive(Default)]
pub struct FakeSink {
    calls: Mutex<Vec<SinkCall>>,
}

impl FakeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().clone()
    }
}

impl Sink for FakeSink {
    fn emit(&self, event: &SinkEvent) {
        self.calls.lock().push(SinkCall {
            event_type: event.event_type.clone(),
            card_name: event.card_name.clone(),
            resource_name: event.resource_name.clone(),
        });
    }
}

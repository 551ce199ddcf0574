// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Fan-out of incident lifecycle events to named sinks.

mod events;
mod logger;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use events::{incident_completion_event, incident_start_event};
pub use logger::LoggingSink;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSink, SinkCall};

use std::collections::HashMap;

use sentinel_core::{SentinelSettings, SinkConfig, SinkEvent};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("unsupported sink type '{0}'")]
    UnsupportedType(String),
}

/// A named audit/log output for lifecycle events.
pub trait Sink: Send + Sync + 'static {
    fn emit(&self, event: &SinkEvent);
}

fn build_sink(config: &SinkConfig) -> Result<Box<dyn Sink>, SinkError> {
    match config.sink_type.as_str() {
        "logger" => Ok(Box::new(LoggingSink::new(config.clone()))),
        other => Err(SinkError::UnsupportedType(other.to_string())),
    }
}

/// Dispatches events to the sinks named on an incident card.
///
/// `emit` never raises or panics regardless of sink behaviour: a missing
/// sink name or a sink that panics internally (it can't from safe code, but
/// a future sink implementation returning an error path would be caught
/// here too) never aborts the fan-out loop.
pub struct SinkDispatcher {
    sinks: HashMap<String, Box<dyn Sink>>,
}

impl SinkDispatcher {
    pub fn new(sinks: HashMap<String, Box<dyn Sink>>) -> Self {
        Self { sinks }
    }

    pub fn from_settings(settings: &SentinelSettings) -> Self {
        let mut registry: HashMap<String, Box<dyn Sink>> = HashMap::new();
        for config in &settings.sinks {
            if registry.contains_key(&config.name) {
                tracing::warn!(sink = %config.name, "duplicate sink definition; keeping first instance");
                continue;
            }
            match build_sink(config) {
                Ok(sink) => {
                    registry.insert(config.name.clone(), sink);
                }
                Err(err) => {
                    tracing::error!(sink = %config.name, sink_type = %config.sink_type, error = %err, "failed to initialise sink; skipping");
                }
            }
        }
        Self::new(registry)
    }

    pub fn emit(&self, sink_names: &[String], event: SinkEvent) {
        if sink_names.is_empty() {
            return;
        }
        for name in sink_names {
            let Some(sink) = self.sinks.get(name) else {
                tracing::warn!(
                    sink = %name,
                    event_type = %event.event_type,
                    card = %event.card_name,
                    resource = %event.resource_name,
                    "no sink configured for card entry; event skipped"
                );
                continue;
            };
            sink.emit(&event);
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

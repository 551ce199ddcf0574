// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The one sink type defined: structured log lines via `tracing`.

use sentinel_core::{SinkConfig, SinkEvent};

use crate::Sink;

pub struct LoggingSink {
    config: SinkConfig,
}

impl LoggingSink {
    pub fn new(config: SinkConfig) -> Self {
        Self { config }
    }
}

impl Sink for LoggingSink {
    fn emit(&self, event: &SinkEvent) {
        let sink = self.config.name.as_str();
        let channel = self.config.channel.as_deref().unwrap_or("");
        let payload = event.payload.to_string();

        match self.config.level.to_uppercase().as_str() {
            "TRACE" => tracing::trace!(
                sink, channel, event_type = %event.event_type, resource = %event.resource_name,
                card = %event.card_name, payload, "{}", event.message
            ),
            "DEBUG" => tracing::debug!(
                sink, channel, event_type = %event.event_type, resource = %event.resource_name,
                card = %event.card_name, payload, "{}", event.message
            ),
            "WARN" | "WARNING" => tracing::warn!(
                sink, channel, event_type = %event.event_type, resource = %event.resource_name,
                card = %event.card_name, payload, "{}", event.message
            ),
            "ERROR" => tracing::error!(
                sink, channel, event_type = %event.event_type, resource = %event.resource_name,
                card = %event.card_name, payload, "{}", event.message
            ),
            _ => tracing::info!(
                sink, channel, event_type = %event.event_type, resource = %event.resource_name,
                card = %event.card_name, payload, "{}", event.message
            ),
        }
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Static, process-lifetime configuration entities: cards, watchers,
//! tool-server descriptors, sinks, and the settings aggregate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::duration::DurationSeconds;
use crate::error::CoreError;

/// Declarative handling recipe binding a resource name to a prompt, a tool
/// allow-list, a sink set, and a turn budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IncidentCard {
    pub name: String,
    /// Matches `Resource.name`.
    pub resource: String,
    #[serde(alias = "prompt", alias = "prompt-template")]
    pub prompt_template: String,
    #[serde(default, alias = "model-name")]
    pub model: Option<String>,
    /// Ordered list of `server` / `server.tool` identifiers; empty allowed.
    #[serde(default, alias = "tool-list")]
    pub tools: Vec<String>,
    #[serde(default, alias = "sink-list")]
    pub sinks: Vec<String>,
    #[serde(default = "default_max_iterations", alias = "max-iterations")]
    pub max_iterations: u32,
}

fn default_max_iterations() -> u32 {
    6
}

impl IncidentCard {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_empty() {
            return Err(CoreError::Empty { field: "card.name" });
        }
        if self.resource.is_empty() {
            return Err(CoreError::Empty {
                field: "card.resource",
            });
        }
        if !(1..=20).contains(&self.max_iterations) {
            return Err(CoreError::OutOfRange {
                field: "card.max_iterations",
                value: self.max_iterations as i64,
                min: 1,
                max: 20,
            });
        }
        Ok(())
    }
}

/// One periodic HTTP poller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatcherConfig {
    pub name: String,
    pub endpoint: String,
    pub poll_interval_seconds: DurationSeconds,
    pub timeout_seconds: DurationSeconds,
    #[serde(default)]
    pub resources: Vec<String>,
}

impl WatcherConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_empty() {
            return Err(CoreError::Empty {
                field: "watcher.name",
            });
        }
        if self.endpoint.is_empty() {
            return Err(CoreError::Empty {
                field: "watcher.endpoint",
            });
        }
        Ok(())
    }
}

/// Descriptor for an external MCP tool server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolServerConfig {
    pub name: String,
    #[serde(default, alias = "server-label", alias = "label")]
    pub server_label: Option<String>,
    #[serde(default, alias = "server-url", alias = "url")]
    pub server_url: Option<String>,
    #[serde(default, alias = "connector-id")]
    pub connector_id: Option<String>,
    #[serde(default, alias = "auth-token", alias = "token")]
    pub authorization: Option<String>,
    #[serde(default, alias = "http-headers")]
    pub headers: BTreeMap<String, String>,
    #[serde(default, alias = "default-allowed-tools")]
    pub default_allowed_tools: Option<Vec<String>>,
    #[serde(default, alias = "require-approval")]
    pub require_approval: Option<String>,
    #[serde(default, alias = "server-description")]
    pub description: Option<String>,
}

impl ToolServerConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_empty() {
            return Err(CoreError::Empty {
                field: "tool_server.name",
            });
        }
        if self.server_url.is_none() && self.connector_id.is_none() {
            return Err(CoreError::ToolServerMissingEndpoint);
        }
        Ok(())
    }
}

/// Named audit/log output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SinkConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub sink_type: String,
    #[serde(default = "default_sink_level")]
    pub level: String,
    #[serde(default)]
    pub channel: Option<String>,
}

fn default_sink_level() -> String {
    "INFO".to_string()
}

/// Dispatcher-tuning flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispatcherSettings {
    #[serde(default = "default_queue_size", alias = "queue-size")]
    pub queue_size: u32,
    #[serde(default = "default_dedupe_ttl", alias = "dedupe-ttl-seconds")]
    pub dedupe_ttl_seconds: u32,
    #[serde(default = "default_worker_concurrency", alias = "worker-concurrency")]
    pub worker_concurrency: u32,
}

fn default_queue_size() -> u32 {
    100
}
fn default_dedupe_ttl() -> u32 {
    600
}
fn default_worker_concurrency() -> u32 {
    4
}

impl Default for DispatcherSettings {
    fn default() -> Self {
        Self {
            queue_size: default_queue_size(),
            dedupe_ttl_seconds: default_dedupe_ttl(),
            worker_concurrency: default_worker_concurrency(),
        }
    }
}

impl DispatcherSettings {
    pub fn validate(&self) -> Result<(), CoreError> {
        check_range("dispatcher.queue_size", self.queue_size, 1, 1000)?;
        check_range(
            "dispatcher.dedupe_ttl_seconds",
            self.dedupe_ttl_seconds,
            10,
            3600,
        )?;
        check_range(
            "dispatcher.worker_concurrency",
            self.worker_concurrency,
            1,
            32,
        )?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: u32, min: i64, max: i64) -> Result<(), CoreError> {
    let v = value as i64;
    if v < min || v > max {
        return Err(CoreError::OutOfRange {
            field,
            value: v,
            min,
            max,
        });
    }
    Ok(())
}

/// Fallback model settings used when an `IncidentCard` omits `model`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiSettings {
    #[serde(default = "default_model", alias = "model-name")]
    pub model: String,
    #[serde(default = "default_temperature", alias = "temp")]
    pub temperature: f64,
}

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}
fn default_temperature() -> f64 {
    0.2
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

/// Aggregate of every configuration entity for a Sentinel process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SentinelSettings {
    #[serde(default, alias = "incident-cards")]
    pub incident_cards: Vec<IncidentCard>,
    #[serde(default)]
    pub resources: Vec<crate::resource::ResourceDefinition>,
    #[serde(default)]
    pub watchers: Vec<WatcherConfig>,
    #[serde(default)]
    pub tool_servers: Vec<ToolServerConfig>,
    #[serde(default)]
    pub sinks: Vec<SinkConfig>,
    #[serde(default)]
    pub dispatcher: DispatcherSettings,
    #[serde(default, alias = "openai-settings")]
    pub openai: OpenAiSettings,
}

impl SentinelSettings {
    pub fn validate(&self) -> Result<(), CoreError> {
        self.dispatcher.validate()?;
        for card in &self.incident_cards {
            card.validate()?;
        }
        for watcher in &self.watchers {
            watcher.validate()?;
        }
        for server in &self.tool_servers {
            server.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;

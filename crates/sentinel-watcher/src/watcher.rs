// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex as SyncMutex;
use sentinel_core::{DispatcherStatus, IncidentNotification, ResourceDefinition, WatcherConfig};
use sentinel_dispatcher::Dispatcher;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::alerts::AlertsResponse;
use crate::url::alerts_url;

/// Polls one configured alert source and dispatches matching resources.
pub struct Watcher {
    config: WatcherConfig,
    alerts_url: String,
    resource_defs: Vec<ResourceDefinition>,
    dispatcher: Arc<Dispatcher>,
    client: reqwest::Client,
    cancel: CancellationToken,
    task: SyncMutex<Option<JoinHandle<()>>>,
}

impl Watcher {
    /// Resolve `config.resources` against the full resource-definition
    /// catalogue, substituting a synthetic `{name, filters: {alertname:
    /// name}}` definition with a warning for any unknown reference.
    pub fn new(
        config: WatcherConfig,
        catalogue: &[ResourceDefinition],
        dispatcher: Arc<Dispatcher>,
    ) -> Self {
        let resource_defs = config
            .resources
            .iter()
            .map(|name| {
                catalogue
                    .iter()
                    .find(|def| &def.name == name)
                    .cloned()
                    .unwrap_or_else(|| {
                        tracing::warn!(
                            watcher = %config.name,
                            resource = %name,
                            "watcher references unknown resource definition; substituting a synthetic alertname match"
                        );
                        ResourceDefinition::synthetic_alertname(name)
                    })
            })
            .collect();

        let alerts_url = alerts_url(&config.endpoint);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            config,
            alerts_url,
            resource_defs,
            dispatcher,
            client,
            cancel: CancellationToken::new(),
            task: SyncMutex::new(None),
        }
    }

    /// Execute one poll cycle; returns the count of notifications that were
    /// actually queued.
    pub async fn poll_once(&self) -> usize {
        let alerts = match self.fetch_alerts().await {
            Some(alerts) => alerts,
            None => return 0,
        };

        let mut queued = 0;
        for alert in alerts {
            for definition in &self.resource_defs {
                if !definition.matches(&alert.labels) {
                    continue;
                }
                let resource = alert.to_resource(definition);
                let notification = IncidentNotification::new(resource, serde_json::json!({
                    "labels": alert.labels,
                    "annotations": alert.annotations,
                    "status": alert.status,
                    "startsAt": alert.starts_at,
                    "activeAt": alert.active_at,
                    "value": alert.value,
                }));
                let result = self.dispatcher.dispatch(notification);
                if result.status == DispatcherStatus::Queued {
                    queued += 1;
                }
            }
        }
        queued
    }

    async fn fetch_alerts(&self) -> Option<Vec<crate::alerts::Alert>> {
        let response = match self.client.get(&self.alerts_url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(watcher = %self.config.name, url = %self.alerts_url, error = %err, "poll request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                watcher = %self.config.name,
                url = %self.alerts_url,
                status = %response.status(),
                "poll received non-2xx status"
            );
            return None;
        }

        match response.json::<AlertsResponse>().await {
            Ok(decoded) => Some(decoded.into_alerts()),
            Err(err) => {
                tracing::warn!(watcher = %self.config.name, error = %err, "failed to decode alerts body");
                None
            }
        }
    }

    /// Start the poll loop. Idempotent.
    pub fn start(self: &Arc<Self>) {
        let mut task = self.task.lock();
        if task.is_some() {
            return;
        }
        let watcher = self.clone();
        let interval = Duration::from_secs(u64::from(self.config.poll_interval_seconds));
        *task = Some(tokio::spawn(async move {
            loop {
                watcher.poll_once().await;
                tokio::select! {
                    _ = watcher.cancel.cancelled() => break,
                    _ = tokio::time::sleep(interval) => {}
                }
            }
        }));
    }

    /// Stop the poll loop and await its termination. Idempotent.
    pub async fn stop(&self) {
        self.cancel.cancel();
        let handle = self.task.lock().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}

#[cfg(test)]
#[path = "watcher_tests.rs"]
mod tests;

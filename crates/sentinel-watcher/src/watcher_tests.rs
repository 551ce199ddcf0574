// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sentinel_agent::{FakeAgentRuntime, Orchestrator};
use sentinel_core::{DispatcherSettings, DurationSeconds, IncidentCard};
use sentinel_registry::{FakeToolTransport, ToolRegistry};
use sentinel_sinks::SinkDispatcher;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dispatcher_for(resource: &str) -> Arc<Dispatcher> {
    let card = Arc::new(IncidentCard {
        name: "card".to_string(),
        resource: resource.to_string(),
        prompt_template: "inline".to_string(),
        model: None,
        tools: vec![],
        sinks: vec![],
        max_iterations: 3,
    });
    let registry = Arc::new(ToolRegistry::with_transport_factory(
        vec![],
        Arc::new(|_: &sentinel_core::ToolServerConfig| {
            Arc::new(FakeToolTransport::new()) as Arc<dyn sentinel_registry::StreamableHttpTransport>
        }),
    ));
    let sinks = Arc::new(SinkDispatcher::new(Default::default()));
    let runtime = Arc::new(FakeAgentRuntime::new());
    let orchestrator = Arc::new(Orchestrator::new(
        registry,
        sentinel_prompts::PromptRepository::cwd(),
        sinks,
        runtime,
        "gpt-4.1-mini".to_string(),
    ));
    Arc::new(Dispatcher::new(
        vec![card],
        &DispatcherSettings::default(),
        orchestrator,
    ))
}

fn config(endpoint: String) -> WatcherConfig {
    WatcherConfig {
        name: "prom".to_string(),
        endpoint,
        poll_interval_seconds: DurationSeconds(30),
        timeout_seconds: DurationSeconds(5),
        resources: vec!["web-tier".to_string()],
    }
}

fn definitions() -> Vec<ResourceDefinition> {
    let mut filters = std::collections::BTreeMap::new();
    filters.insert("alertname".to_string(), "HighLatency".to_string());
    vec![ResourceDefinition {
        name: "web-tier".to_string(),
        resource_type: "prometheus_alert".to_string(),
        filters,
        annotations: Default::default(),
    }]
}

#[tokio::test]
async fn poll_once_dispatches_matching_alerts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "alerts": [{
                    "labels": {"alertname": "HighLatency"},
                    "annotations": {},
                    "status": {"state": "firing"},
                    "startsAt": "2026-01-01T00:00:00Z",
                    "value": 1.0,
                }]
            }
        })))
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for("web-tier");
    let watcher = Arc::new(Watcher::new(config(server.uri()), &definitions(), dispatcher));
    let queued = watcher.poll_once().await;
    assert_eq!(queued, 1);
}

#[tokio::test]
async fn poll_once_tolerates_non_2xx_and_dispatches_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alerts"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for("web-tier");
    let watcher = Arc::new(Watcher::new(config(server.uri()), &definitions(), dispatcher));
    assert_eq!(watcher.poll_once().await, 0);
}

#[tokio::test]
async fn poll_once_tolerates_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for("web-tier");
    let watcher = Arc::new(Watcher::new(config(server.uri()), &definitions(), dispatcher));
    assert_eq!(watcher.poll_once().await, 0);
}

#[test]
fn unknown_resource_reference_falls_back_to_synthetic_definition() {
    let dispatcher = dispatcher_for("web-tier");
    let cfg = config("http://example.invalid".to_string());
    let watcher = Watcher::new(cfg, &[], dispatcher);
    assert_eq!(watcher.resource_defs.len(), 1);
    assert_eq!(watcher.resource_defs[0].name, "web-tier");
    assert_eq!(
        watcher.resource_defs[0].filters.get("alertname"),
        Some(&"web-tier".to_string())
    );
}

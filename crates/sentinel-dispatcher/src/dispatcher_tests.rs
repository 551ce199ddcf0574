// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sentinel_agent::FakeAgentRuntime;
use sentinel_core::{DispatcherStatus, Resource};
use sentinel_registry::{FakeToolTransport, ToolRegistry};
use sentinel_sinks::SinkDispatcher;
use std::collections::BTreeMap;

fn card(name: &str, resource: &str) -> Arc<IncidentCard> {
    Arc::new(IncidentCard {
        name: name.to_string(),
        resource: resource.to_string(),
        prompt_template: "inline template".to_string(),
        model: None,
        tools: vec![],
        sinks: vec![],
        max_iterations: 3,
    })
}

fn notification(resource: &str) -> IncidentNotification {
    IncidentNotification::new(
        Resource {
            resource_type: "prometheus_alert".to_string(),
            name: resource.to_string(),
            labels: BTreeMap::new(),
            annotations: BTreeMap::new(),
            state: Some("firing".to_string()),
            value: None,
            timestamp: None,
        },
        serde_json::Value::Null,
    )
}

fn test_dispatcher(settings: DispatcherSettings, cards: Vec<Arc<IncidentCard>>) -> Arc<Dispatcher> {
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
    Arc::new(Dispatcher::new(cards, &settings, orchestrator))
}

#[test]
fn unknown_resource_is_dropped_without_enqueueing() {
    let dispatcher = test_dispatcher(DispatcherSettings::default(), vec![]);
    let result = dispatcher.dispatch(notification("web-tier"));
    assert_eq!(result.status, DispatcherStatus::Dropped);
    assert_eq!(result.detail.as_deref(), Some("no incident card"));
}

#[test]
fn duplicate_cards_for_one_resource_keep_the_first() {
    let cards = vec![card("primary", "web-tier"), card("shadow", "web-tier")];
    let dispatcher = test_dispatcher(DispatcherSettings::default(), cards);
    let result = dispatcher.dispatch(notification("web-tier"));
    assert_eq!(result.incident_card.unwrap().name, "primary");
}

#[test]
fn second_dispatch_within_ttl_is_deduped() {
    let cards = vec![card("primary", "web-tier")];
    let dispatcher = test_dispatcher(DispatcherSettings::default(), cards);
    let first = dispatcher.dispatch(notification("web-tier"));
    assert_eq!(first.status, DispatcherStatus::Queued);
    let second = dispatcher.dispatch(notification("web-tier"));
    assert_eq!(second.status, DispatcherStatus::Duplicate);
}

#[test]
fn queue_full_drops_without_inserting_dedup_entry() {
    let mut settings = DispatcherSettings::default();
    settings.queue_size = 1;
    let cards = vec![card("a", "web-tier"), card("b", "db-tier")];
    let dispatcher = test_dispatcher(settings, cards);
    let first = dispatcher.dispatch(notification("web-tier"));
    assert_eq!(first.status, DispatcherStatus::Queued);
    let second = dispatcher.dispatch(notification("db-tier"));
    assert_eq!(second.status, DispatcherStatus::Dropped);
    assert_eq!(second.detail.as_deref(), Some("queue full"));
    // Retrying the dropped resource is not blocked by a stray dedup entry.
    let third = dispatcher.dispatch(notification("db-tier"));
    assert_eq!(third.status, DispatcherStatus::Dropped);
}

#[tokio::test]
async fn start_and_stop_are_idempotent_and_drain_inflight_work() {
    let cards = vec![card("primary", "web-tier")];
    let dispatcher = test_dispatcher(DispatcherSettings::default(), cards);
    dispatcher.start();
    dispatcher.start();
    let result = dispatcher.dispatch(notification("web-tier"));
    assert_eq!(result.status, DispatcherStatus::Queued);
    dispatcher.join().await;
    dispatcher.stop().await;
    dispatcher.stop().await;
}

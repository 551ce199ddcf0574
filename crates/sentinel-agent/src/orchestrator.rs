// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use sentinel_core::{IncidentCard, IncidentNotification};
use sentinel_prompts::{build_initial_input, PromptRenderer, PromptRepository};
use sentinel_registry::{RemoteServerSession, ToolHandle, ToolRegistry};
use sentinel_sinks::{incident_completion_event, incident_start_event, SinkDispatcher};
use thiserror::Error;

use crate::runtime::{AgentRuntime, AgentSpec, LocalTool, RunConfig};

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("failed to connect to one or more tool servers: {0}")]
    Connect(String),
    #[error(transparent)]
    Runtime(#[from] crate::runtime::RuntimeError),
}

/// Drives a single incident end to end: render → announce → resolve tools →
/// connect → run → announce outcome → cleanup.
pub struct Orchestrator {
    registry: Arc<ToolRegistry>,
    prompts: PromptRepository,
    renderer: PromptRenderer,
    sinks: Arc<SinkDispatcher>,
    agent_runtime: Arc<dyn AgentRuntime>,
    default_model: String,
}

impl Orchestrator {
    pub fn new(
        registry: Arc<ToolRegistry>,
        prompts: PromptRepository,
        sinks: Arc<SinkDispatcher>,
        agent_runtime: Arc<dyn AgentRuntime>,
        default_model: String,
    ) -> Self {
        Self {
            registry,
            prompts,
            renderer: PromptRenderer::new(),
            sinks,
            agent_runtime,
            default_model,
        }
    }

    pub async fn run_incident(
        &self,
        card: &IncidentCard,
        notification: &IncidentNotification,
    ) -> Result<(), OrchestratorError> {
        let template = self.prompts.load(&card.prompt_template);
        let instructions = self.renderer.render(&template, notification);

        self.sinks
            .emit(&card.sinks, incident_start_event(card, notification));

        let handles = self.registry.resolve(&card.tools);
        let (local_tools, remote_servers) = partition_handles(handles);

        if let Err(err) = connect_all(&remote_servers).await {
            cleanup_all(&remote_servers).await;
            return Err(OrchestratorError::Connect(err));
        }

        let spec = AgentSpec {
            name: format!("{}-agent", card.name),
            instructions,
            local_tools,
            remote_servers: remote_servers.clone(),
            model: card
                .model
                .clone()
                .unwrap_or_else(|| self.default_model.clone()),
        };
        let initial_input = build_initial_input(notification);
        let run_config = RunConfig {
            max_turns: card.max_iterations,
            workflow_name: format!("incident::{}", card.name),
            trace_metadata: serde_json::json!({
                "resource": notification.resource.name,
                "card": card.name,
            }),
        };

        let run_result = self
            .agent_runtime
            .run(&spec, &initial_input, &run_config)
            .await;

        cleanup_all(&remote_servers).await;

        match run_result {
            Ok(outcome) => {
                self.sinks.emit(
                    &card.sinks,
                    incident_completion_event(
                        card,
                        notification,
                        "success",
                        serde_json::json!({
                            "final_output": outcome.final_output,
                            "turn_count": outcome.turn_count,
                        }),
                    ),
                );
                Ok(())
            }
            Err(err) => {
                self.sinks.emit(
                    &card.sinks,
                    incident_completion_event(
                        card,
                        notification,
                        "failure",
                        serde_json::json!({ "error": err.to_string() }),
                    ),
                );
                Err(OrchestratorError::from(err))
            }
        }
    }
}

fn partition_handles(handles: Vec<ToolHandle>) -> (Vec<LocalTool>, Vec<RemoteServerSession>) {
    let mut local = Vec::new();
    let mut remote = Vec::new();
    for handle in handles {
        match handle {
            ToolHandle::Local { name, description } => local.push(LocalTool { name, description }),
            ToolHandle::Remote(session) => remote.push(session),
        }
    }
    (local, remote)
}

async fn connect_all(sessions: &[RemoteServerSession]) -> Result<(), String> {
    for session in sessions {
        if let Err(err) = session.connect().await {
            tracing::warn!(server = %session.name, error = %err, "tool server connect failed");
            return Err(err.to_string());
        }
    }
    Ok(())
}

async fn cleanup_all(sessions: &[RemoteServerSession]) {
    for session in sessions {
        session.cleanup().await;
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;

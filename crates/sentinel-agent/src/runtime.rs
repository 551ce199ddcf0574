// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use sentinel_registry::RemoteServerSession;
use thiserror::Error;

/// A tool that is invoked in-process rather than through a remote MCP
/// session. The registry never produces these today (see
/// `sentinel_registry::ToolHandle`); the shape exists so the agent
/// description is already correct if one is ever wired in.
#[derive(Debug, Clone)]
pub struct LocalTool {
    pub name: String,
    pub description: String,
}

/// Everything the external agent runtime needs to execute one incident.
pub struct AgentSpec {
    pub name: String,
    pub instructions: String,
    pub local_tools: Vec<LocalTool>,
    pub remote_servers: Vec<RemoteServerSession>,
    pub model: String,
}

/// Parameters threaded through to the runtime's own tracing/telemetry.
pub struct RunConfig {
    pub max_turns: u32,
    pub workflow_name: String,
    pub trace_metadata: serde_json::Value,
}

/// Outcome of a completed agent run.
#[derive(Debug, Clone)]
pub struct AgentRunOutcome {
    pub final_output: String,
    pub turn_count: u32,
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("agent run failed: {0}")]
    Failed(String),
    #[error("agent exceeded its turn budget")]
    TurnBudgetExceeded,
}

/// The opaque external agent/tool protocol runtime. Sentinel only needs to
/// hand it an instructed agent, an initial user message, and a turn budget,
/// and get back a final output or an error.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    async fn run(
        &self,
        spec: &AgentSpec,
        initial_input: &str,
        run_config: &RunConfig,
    ) -> Result<AgentRunOutcome, RuntimeError>;
}

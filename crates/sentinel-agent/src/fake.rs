// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::runtime::{AgentRunOutcome, AgentRuntime, AgentSpec, RunConfig, RuntimeError};

#[derive(Debug, Clone)]
pub struct RunCall {
    pub agent_name: String,
    pub initial_input: String,
    pub max_turns: u32,
}

/// Deterministic `AgentRuntime` double recording every `run` call, used by
/// orchestrator and dispatcher tests.
pub struct FakeAgentRuntime {
    calls: Mutex<Vec<RunCall>>,
    fail: bool,
}

impl FakeAgentRuntime {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<RunCall> {
        self.calls.lock().clone()
    }
}

impl Default for FakeAgentRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentRuntime for FakeAgentRuntime {
    async fn run(
        &self,
        spec: &AgentSpec,
        initial_input: &str,
        run_config: &RunConfig,
    ) -> Result<AgentRunOutcome, RuntimeError> {
        self.calls.lock().push(RunCall {
            agent_name: spec.name.clone(),
            initial_input: initial_input.to_string(),
            max_turns: run_config.max_turns,
        });
        if self.fail {
            return Err(RuntimeError::Failed("fake runtime failure".to_string()));
        }
        Ok(AgentRunOutcome {
            final_output: "resolved".to_string(),
            turn_count: 1,
        })
    }
}

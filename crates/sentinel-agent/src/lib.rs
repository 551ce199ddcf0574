// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! The incident orchestrator: renders prompts, resolves tools, drives the
//! external agent runtime, and guarantees tool-server cleanup.

mod openai_runtime;
mod orchestrator;
mod runtime;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use openai_runtime::OpenAiAgentRuntime;
pub use orchestrator::{Orchestrator, OrchestratorError};
pub use runtime::{AgentRunOutcome, AgentRuntime, AgentSpec, LocalTool, RunConfig, RuntimeError};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeAgentRuntime, RunCall};

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use openai_rust2::chat::{ChatArguments, Message as ChatMessage};
use openai_rust2::Client as OpenAiClient;

use crate::runtime::{AgentRunOutcome, AgentRuntime, AgentSpec, RunConfig, RuntimeError};

/// `AgentRuntime` backed by a single OpenAI Chat Completions call.
///
/// This is *not* a port of `openai-agents`' multi-turn tool-calling loop —
/// reimplementing that wire protocol is explicitly out of scope. It gives
/// `sentineld` a real, network-backed default: the card's instructions go in
/// as the system message, the watcher-built initial input as the user
/// message, and the model's reply becomes the incident's final output with
/// a fixed turn count of one. Remote MCP tool servers are still connected
/// and cleaned up by the orchestrator around this call; this runtime does
/// not invoke them.
pub struct OpenAiAgentRuntime {
    client: OpenAiClient,
}

impl OpenAiAgentRuntime {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: OpenAiClient::new_with_client(api_key, reqwest::Client::new()),
        }
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            client: OpenAiClient::new_with_client_and_base_url(
                api_key,
                reqwest::Client::new(),
                base_url,
            ),
        }
    }
}

#[async_trait]
impl AgentRuntime for OpenAiAgentRuntime {
    async fn run(
        &self,
        spec: &AgentSpec,
        initial_input: &str,
        _run_config: &RunConfig,
    ) -> Result<AgentRunOutcome, RuntimeError> {
        let messages = vec![
            ChatMessage {
                role: "system".to_string(),
                content: spec.instructions.clone(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: initial_input.to_string(),
            },
        ];

        let chat_arguments = ChatArguments::new(&spec.model, messages);
        let response = self
            .client
            .create_chat(chat_arguments, None)
            .await
            .map_err(|err| RuntimeError::Failed(err.to_string()))?;

        let final_output = response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| RuntimeError::Failed("empty choices in chat completion response".to_string()))?;

        Ok(AgentRunOutcome {
            final_output,
            turn_count: 1,
        })
    }
}

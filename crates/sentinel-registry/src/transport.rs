// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use sentinel_core::ToolServerConfig;
use thiserror::Error;

const CLIENT_SESSION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to connect to MCP server '{server}': {source}")]
    Connect {
        server: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("MCP server '{0}' returned a non-success status on connect: {1}")]
    UnhealthyStatus(String, reqwest::StatusCode),
}

/// Lifecycle handle for a remote MCP tool server, reached over the
/// Streamable HTTP transport.
///
/// `connect()` is idempotent and best-effort cheap: it performs a single
/// handshake request against the server so that misconfigured endpoints
/// fail fast, before the agent run begins. `cleanup()` never raises.
#[async_trait]
pub trait StreamableHttpTransport: Send + Sync {
    async fn connect(&self) -> Result<(), TransportError>;
    async fn cleanup(&self);
}

/// Real transport backed by a `reqwest::Client`, built with
/// `cache_tools_list = true` semantics: the tools list is fetched once on
/// connect and not re-polled for the lifetime of the session.
pub struct HttpToolTransport {
    server_name: String,
    server_url: String,
    client: reqwest::Client,
    connected: Mutex<bool>,
}

impl HttpToolTransport {
    pub fn new(config: &ToolServerConfig) -> Self {
        let mut builder = reqwest::Client::builder().timeout(CLIENT_SESSION_TIMEOUT);
        if let Some(authorization) = &config.authorization {
            let mut headers = reqwest::header::HeaderMap::new();
            if let Ok(value) = reqwest::header::HeaderValue::from_str(authorization) {
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
            builder = builder.default_headers(headers);
        }
        let client = builder
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            server_name: config.name.clone(),
            server_url: config.server_url.clone().unwrap_or_default(),
            client,
            connected: Mutex::new(false),
        }
    }
}

#[async_trait]
impl StreamableHttpTransport for HttpToolTransport {
    async fn connect(&self) -> Result<(), TransportError> {
        if self.server_url.is_empty() {
            // Connector-backed servers (no HTTP endpoint of our own to reach)
            // are treated as already connected.
            *self.connected.lock() = true;
            return Ok(());
        }
        let response = self
            .client
            .get(&self.server_url)
            .send()
            .await
            .map_err(|source| TransportError::Connect {
                server: self.server_name.clone(),
                source,
            })?;
        if !response.status().is_success() && !response.status().is_redirection() {
            return Err(TransportError::UnhealthyStatus(
                self.server_name.clone(),
                response.status(),
            ));
        }
        *self.connected.lock() = true;
        Ok(())
    }

    async fn cleanup(&self) {
        *self.connected.lock() = false;
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;

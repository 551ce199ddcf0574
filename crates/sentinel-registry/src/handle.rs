// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use crate::transport::{StreamableHttpTransport, TransportError};

/// A resolved tool reference handed to the agent runtime.
///
/// The registry only ever constructs hosted MCP server sessions today, so
/// `Local` is currently never produced by [`crate::ToolRegistry::resolve`];
/// it is kept as an explicit variant (rather than duck-typing on
/// name/description) so a future in-process tool provider slots in without
/// reshaping every caller that matches on this type.
#[derive(Clone)]
pub enum ToolHandle {
    Local { name: String, description: String },
    Remote(RemoteServerSession),
}

impl ToolHandle {
    pub fn name(&self) -> &str {
        match self {
            ToolHandle::Local { name, .. } => name,
            ToolHandle::Remote(session) => &session.name,
        }
    }
}

/// A live session against one configured MCP tool server, scoped to the
/// tool names the incident card is allowed to invoke.
#[derive(Clone)]
pub struct RemoteServerSession {
    pub name: String,
    pub server_url: Option<String>,
    /// `None` means "all tools the server exposes".
    pub allowed_tools: Option<Vec<String>>,
    transport: Arc<dyn StreamableHttpTransport>,
}

impl RemoteServerSession {
    pub fn new(
        name: String,
        server_url: Option<String>,
        allowed_tools: Option<Vec<String>>,
        transport: Arc<dyn StreamableHttpTransport>,
    ) -> Self {
        Self {
            name,
            server_url,
            allowed_tools,
            transport,
        }
    }

    pub async fn connect(&self) -> Result<(), TransportError> {
        self.transport.connect().await
    }

    pub async fn cleanup(&self) {
        self.transport.cleanup().await;
    }
}

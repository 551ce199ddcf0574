// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;
use std::sync::Arc;

use sentinel_core::ToolServerConfig;

use crate::handle::{RemoteServerSession, ToolHandle};
use crate::identifier::{group_identifiers, GroupedTools};
use crate::transport::{HttpToolTransport, StreamableHttpTransport};

type TransportFactory = Arc<dyn Fn(&ToolServerConfig) -> Arc<dyn StreamableHttpTransport> + Send + Sync>;

/// Resolves `server` / `server.tool` identifiers declared on incident cards
/// into [`ToolHandle`]s. `resolve` is purely synchronous and never opens a
/// network connection; connecting is the caller's job.
pub struct ToolRegistry {
    servers: HashMap<String, ToolServerConfig>,
    transport_factory: TransportFactory,
}

impl ToolRegistry {
    pub fn new(servers: Vec<ToolServerConfig>) -> Self {
        Self::with_transport_factory(servers, Arc::new(|config: &ToolServerConfig| {
            Arc::new(HttpToolTransport::new(config)) as Arc<dyn StreamableHttpTransport>
        }))
    }

    pub fn with_transport_factory(servers: Vec<ToolServerConfig>, transport_factory: TransportFactory) -> Self {
        Self {
            servers: servers.into_iter().map(|s| (s.name.clone(), s)).collect(),
            transport_factory,
        }
    }

    pub fn resolve(&self, identifiers: &[String]) -> Vec<ToolHandle> {
        if identifiers.is_empty() {
            return Vec::new();
        }

        let grouped = group_identifiers(identifiers);
        let mut resolved = Vec::with_capacity(grouped.len());

        for (server_name, group) in grouped {
            let Some(server) = self.servers.get(&server_name) else {
                tracing::warn!(server = %server_name, "skipping tools for unknown MCP server");
                continue;
            };

            let allowed_tools = derive_allowed_tools(server, &group);
            if matches!(&allowed_tools, Some(tools) if tools.is_empty()) {
                tracing::warn!(server = %server_name, "no tools resolved for server");
                continue;
            }

            let transport = (self.transport_factory)(server);
            let session = RemoteServerSession::new(
                server.name.clone(),
                server.server_url.clone(),
                allowed_tools,
                transport,
            );
            resolved.push(ToolHandle::Remote(session));
        }

        resolved
    }
}

/// Per-server tool resolution, simplified relative to the source system:
/// no live discovery client, only the configured `default_allowed_tools`
/// fallback.
fn derive_allowed_tools(server: &ToolServerConfig, group: &GroupedTools) -> Option<Vec<String>> {
    if group.wildcard || group.explicit.is_empty() {
        return server
            .default_allowed_tools
            .as_ref()
            .map(|tools| dedupe_preserving_order(tools));
    }

    let mut explicit: Vec<String> = group.explicit.iter().cloned().collect();
    explicit.sort();
    Some(explicit)
}

fn dedupe_preserving_order(tools: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tools
        .iter()
        .filter(|t| seen.insert((*t).clone()))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::{HashMap, HashSet};

/// Per-server accumulation of requested tool names, or a wildcard.
#[derive(Debug, Default, Clone)]
pub struct GroupedTools {
    pub explicit: HashSet<String>,
    pub wildcard: bool,
}

/// Parse `server` / `server.tool` / `server.*` identifiers, grouping by
/// server name. A bare server entry, `server.`, and `server.*` are all
/// wildcards. An identifier with an empty server component is dropped with
/// a warning.
pub fn group_identifiers(identifiers: &[String]) -> HashMap<String, GroupedTools> {
    let mut grouped: HashMap<String, GroupedTools> = HashMap::new();
    for raw in identifiers {
        let identifier = raw.trim();
        if identifier.is_empty() {
            continue;
        }
        let (server, rest) = match identifier.split_once('.') {
            Some((server, tool)) => (server, Some(tool)),
            None => (identifier, None),
        };
        if server.is_empty() {
            tracing::warn!(identifier = %raw, "invalid tool identifier; missing server component");
            continue;
        }
        let group = grouped.entry(server.to_string()).or_default();
        match rest {
            None => group.wildcard = true,
            Some("") | Some("*") => group.wildcard = true,
            Some(tool) => {
                group.explicit.insert(tool.to_string());
            }
        }
    }
    grouped
}

#[cfg(test)]
#[path = "identifier_tests.rs"]
mod tests;

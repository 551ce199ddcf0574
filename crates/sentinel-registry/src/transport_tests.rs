// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn connector_only_server_has_empty_url() {
    let config = ToolServerConfig {
        name: "billing".to_string(),
        server_label: None,
        server_url: None,
        connector_id: Some("conn-123".to_string()),
        authorization: None,
        headers: Default::default(),
        default_allowed_tools: None,
        require_approval: None,
        description: None,
    };
    let transport = HttpToolTransport::new(&config);
    assert!(transport.server_url.is_empty());
}

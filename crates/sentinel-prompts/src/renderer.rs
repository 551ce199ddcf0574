// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use sentinel_core::IncidentNotification;

use crate::context::build_context;

/// Renders `${name}` placeholders against an incident notification.
///
/// Rendering never fails: an unrecognized placeholder is substituted with
/// an empty string, and any scanning error falls back to the raw template.
pub struct PromptRenderer;

impl PromptRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, template: &str, notification: &IncidentNotification) -> String {
        let ctx = build_context(notification);
        substitute(template, &ctx).unwrap_or_else(|| template.to_string())
    }
}

impl Default for PromptRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Hand-rolled `${key}` scanner. Returns `None` on malformed placeholders
/// (unterminated `${`) so the caller can fall back to the raw template.
fn substitute(template: &str, ctx: &std::collections::BTreeMap<String, String>) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        rest = &rest[dollar..];
        if rest.as_bytes().get(1) == Some(&b'{') {
            let close = rest[2..].find('}')?;
            let key = &rest[2..2 + close];
            out.push_str(ctx.get(key).map(String::as_str).unwrap_or(""));
            rest = &rest[2 + close + 1..];
        } else {
            out.push('$');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    Some(out)
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation errors for the core data model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{field} must be non-empty")]
    Empty { field: &'static str },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("tool server config must set server_url or connector_id")]
    ToolServerMissingEndpoint,

    #[error("invalid duration '{0}'")]
    InvalidDuration(String),
}

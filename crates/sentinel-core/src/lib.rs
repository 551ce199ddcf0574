// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sentinel-core: data model shared across the incident-response pipeline.

pub mod dispatch_result;
pub mod duration;
pub mod error;
pub mod notification;
pub mod resource;
pub mod settings;
pub mod sink_event;

pub use dispatch_result::{DispatcherResult, DispatcherStatus};
pub use duration::{parse_duration_seconds, DurationSeconds};
pub use error::CoreError;
pub use notification::IncidentNotification;
pub use resource::{Resource, ResourceDefinition};
pub use settings::{
    DispatcherSettings, IncidentCard, OpenAiSettings, SentinelSettings, SinkConfig,
    ToolServerConfig, WatcherConfig,
};
pub use sink_event::SinkEvent;

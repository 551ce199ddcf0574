// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::transport::{StreamableHttpTransport, TransportError};

/// In-memory transport double recording `connect`/`cleanup` calls, used by
/// `sentinel-agent` and `sentinel-dispatcher` tests to assert the
/// mandatory-cleanup invariant without reaching the network.
pub struct FakeToolTransport {
    fail_connect: bool,
    connect_calls: Mutex<u32>,
    cleanup_calls: Mutex<u32>,
}

impl FakeToolTransport {
    pub fn new() -> Self {
        Self {
            fail_connect: false,
            connect_calls: Mutex::new(0),
            cleanup_calls: Mutex::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_connect: true,
            connect_calls: Mutex::new(0),
            cleanup_calls: Mutex::new(0),
        }
    }

    pub fn connect_calls(&self) -> u32 {
        *self.connect_calls.lock()
    }

    pub fn cleanup_calls(&self) -> u32 {
        *self.cleanup_calls.lock()
    }
}

impl Default for FakeToolTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StreamableHttpTransport for FakeToolTransport {
    async fn connect(&self) -> Result<(), TransportError> {
        *self.connect_calls.lock() += 1;
        if self.fail_connect {
            return Err(TransportError::UnhealthyStatus(
                "fake".to_string(),
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ));
        }
        Ok(())
    }

    async fn cleanup(&self) {
        *self.cleanup_calls.lock() += 1;
    }
}

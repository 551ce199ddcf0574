// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// In-memory `dedupe_key -> expires_at` table. Lossy on restart: a purged
/// cache just means the next duplicate notification dispatches once more
/// instead of being dropped. A linear purge scan per dispatch is cheap at
/// the entry counts a single process's dedupe window accumulates, and
/// avoids a background sweep task.
#[derive(Default)]
pub struct DedupCache {
    entries: Mutex<HashMap<String, Instant>>,
}

impl DedupCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry whose expiry has already passed.
    pub fn purge_expired(&self, now: Instant) {
        self.entries.lock().retain(|_, expires_at| *expires_at > now);
    }

    /// True if `key` is present and has not expired. Does not mutate.
    pub fn is_duplicate(&self, key: &str, now: Instant) -> bool {
        matches!(self.entries.lock().get(key), Some(expires_at) if *expires_at > now)
    }

    pub fn insert(&self, key: String, now: Instant, ttl: Duration) {
        self.entries.lock().insert(key, now + ttl);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

#[cfg(test)]
#[path = "dedup_tests.rs"]
mod tests;

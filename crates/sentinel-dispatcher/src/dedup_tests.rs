// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn purge_removes_only_expired_entries() {
    let cache = DedupCache::new();
    let now = Instant::now();
    cache.insert("a".to_string(), now, Duration::from_secs(10));
    cache.insert("b".to_string(), now - Duration::from_secs(20), Duration::from_secs(1));
    cache.purge_expired(now);
    assert_eq!(cache.len(), 1);
    assert!(!cache.is_duplicate("b", now));
    assert!(cache.is_duplicate("a", now));
}

#[test]
fn is_duplicate_false_for_unknown_key() {
    let cache = DedupCache::new();
    assert!(!cache.is_duplicate("missing", Instant::now()));
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn bare_server_is_wildcard() {
    let grouped = group_identifiers(&["db".to_string()]);
    assert!(grouped["db"].wildcard);
    assert!(grouped["db"].explicit.is_empty());
}

#[test]
fn dot_star_and_trailing_dot_are_wildcard() {
    let grouped = group_identifiers(&["db.*".to_string(), "cache.".to_string()]);
    assert!(grouped["db"].wildcard);
    assert!(grouped["cache"].wildcard);
}

#[test]
fn explicit_tools_accumulate_per_server() {
    let grouped = group_identifiers(&["db.query".to_string(), "db.migrate".to_string()]);
    assert!(!grouped["db"].wildcard);
    assert_eq!(grouped["db"].explicit.len(), 2);
}

#[test]
fn empty_server_component_is_dropped() {
    let grouped = group_identifiers(&[".query".to_string(), "  ".to_string()]);
    assert!(grouped.is_empty());
}

#[test]
fn duplicate_server_identifiers_collapse_into_one_group() {
    let grouped = group_identifiers(&[
        "db.query".to_string(),
        "db".to_string(),
        "db.migrate".to_string(),
    ]);
    assert_eq!(grouped.len(), 1);
    assert!(grouped["db"].wildcard);
    assert_eq!(grouped["db"].explicit.len(), 2);
}

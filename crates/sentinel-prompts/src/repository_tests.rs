// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn loads_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("investigate.md");
    std::fs::write(&path, "Investigate ${resource_name}").unwrap();
    let repo = PromptRepository::new(dir.path());
    assert_eq!(repo.load("investigate.md"), "Investigate ${resource_name}");
}

#[test]
fn falls_back_to_inline_identifier() {
    let dir = tempfile::tempdir().unwrap();
    let repo = PromptRepository::new(dir.path());
    let inline = "Investigate ${resource_name} now.";
    assert_eq!(repo.load(inline), inline);
}

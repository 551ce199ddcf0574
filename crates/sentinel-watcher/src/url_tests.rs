// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn trims_trailing_slash_and_appends_alerts() {
    assert_eq!(alerts_url("http://prom:9090/"), "http://prom:9090/alerts");
}

#[test]
fn leaves_existing_alerts_suffix_untouched() {
    assert_eq!(
        alerts_url("http://prom:9090/api/v1/alerts"),
        "http://prom:9090/api/v1/alerts"
    );
}

#[test]
fn trims_multiple_and_single_trailing_slashes_the_same() {
    assert_eq!(
        alerts_url("http://prom:9090/api/v1/alerts/"),
        "http://prom:9090/api/v1/alerts"
    );
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration string parsing shared by watcher and dispatcher settings.
//!
//! Accepts bare integers (seconds) or suffixed strings ("500ms", "5s", "1m",
//! "1h"), normalising to a whole number of seconds with a floor of 1.

use crate::error::CoreError;

/// Parse a duration string or integer-seconds value into whole seconds.
///
/// `"5s"`, `5`, and `"5000ms"` all yield `5`. Sub-second results round up to
/// the 1-second floor rather than truncating to zero.
pub fn parse_duration_seconds(input: &str) -> Result<u64, CoreError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(CoreError::InvalidDuration(input.to_string()));
    }

    let (num_str, suffix) = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| (&s[..i], s[i..].trim()))
        .unwrap_or((s, ""));

    if num_str.is_empty() {
        return Err(CoreError::InvalidDuration(input.to_string()));
    }

    let num: u64 = num_str
        .parse()
        .map_err(|_| CoreError::InvalidDuration(input.to_string()))?;

    let seconds = match suffix {
        "ms" | "millis" | "millisecond" | "milliseconds" => {
            let secs = num.div_ceil(1000);
            return Ok(secs.max(1));
        }
        "" | "s" | "sec" | "secs" | "second" | "seconds" => num,
        "m" | "min" | "mins" | "minute" | "minutes" => num * 60,
        "h" | "hr" | "hrs" | "hour" | "hours" => num * 3600,
        _ => return Err(CoreError::InvalidDuration(input.to_string())),
    };

    Ok(seconds.max(1))
}

/// A duration field that deserializes from either a bare integer (seconds)
/// or a suffixed string ("500ms", "5s", "1m", "1h"), normalising to whole
/// seconds with a floor of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct DurationSeconds(pub u64);

impl<'de> serde::Deserialize<'de> for DurationSeconds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(u64),
            Str(String),
        }

        let raw = Raw::deserialize(deserializer)?;
        let secs = match raw {
            Raw::Int(n) => n.max(1),
            Raw::Str(s) => parse_duration_seconds(&s).map_err(serde::de::Error::custom)?,
        };
        Ok(DurationSeconds(secs))
    }
}

impl From<DurationSeconds> for u64 {
    fn from(d: DurationSeconds) -> u64 {
        d.0
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

/// Loads prompt templates from disk with a graceful inline fallback.
pub struct PromptRepository {
    base_path: PathBuf,
}

impl PromptRepository {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn cwd() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Return the template string for `prompt_identifier`.
    ///
    /// The identifier is treated as a file path relative to the repository
    /// base. If it doesn't resolve to a readable file, the identifier
    /// itself is returned as inline template text.
    pub fn load(&self, prompt_identifier: &str) -> String {
        let candidate = Path::new(prompt_identifier);
        let candidate = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.base_path.join(candidate)
        };

        match std::fs::read_to_string(&candidate) {
            Ok(contents) => contents,
            Err(_) => {
                tracing::warn!(
                    prompt = %prompt_identifier,
                    "prompt template not found on disk, using identifier as inline instructions"
                );
                prompt_identifier.to_string()
            }
        }
    }
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

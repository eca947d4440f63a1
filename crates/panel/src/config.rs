// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Panel configuration supplied by the embedding UI.

use serde::{Deserialize, Serialize};

/// Read-only panel parameters
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PanelConfig {
    /// Identifier of the story under test; stamped on every outbound command
    #[serde(default)]
    pub story_id: String,

    /// Source path of the story file; display-only metadata
    #[serde(default)]
    pub file_name: String,
}

impl PanelConfig {
    pub fn new(story_id: impl Into<String>) -> Self {
        Self {
            story_id: story_id.into(),
            file_name: String::new(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Last path segment of the story file, for the subnav caption
    pub fn story_file_name(&self) -> &str {
        self.file_name.rsplit('/').next().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

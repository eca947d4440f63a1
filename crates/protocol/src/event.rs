// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Channel events consumed by the panel and debugger commands emitted back.

use crate::call::{Call, CallId, LogItem};
use serde::{Deserialize, Serialize};

/// Render phase name that puts the panel into autoplay
pub const PHASE_PLAYING: &str = "playing";

/// Inbound lifecycle events delivered by the harness channel.
///
/// The panel is a read-side projection: it never originates transitions,
/// it only folds these events into derived state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelEvent {
    /// Full body update for one call
    Call(Call),

    /// Wholesale replacement of the transition log, e.g. on a re-run
    Sync { log: Vec<LogItem> },

    /// Harness-signaled suspension of the control surface
    Lock { locked: bool },

    /// The scenario's render phase changed
    PhaseChanged { new_phase: String },
}

/// Fire-and-forget debugger commands, each targeting the current story
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Start { story_id: String },
    Back { story_id: String },
    Next { story_id: String },
    End { story_id: String },
    Goto { story_id: String, call_id: CallId },
}

impl Command {
    /// Story the command targets
    pub fn story_id(&self) -> &str {
        match self {
            Self::Start { story_id }
            | Self::Back { story_id }
            | Self::Next { story_id }
            | Self::End { story_id }
            | Self::Goto { story_id, .. } => story_id,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON codec for channel payloads.
//!
//! Both directions live here so harness-side test doubles can speak the
//! same wire format as the panel.

use crate::event::{Command, PanelEvent};
use thiserror::Error;

/// Errors produced when encoding or decoding channel payloads
#[derive(Debug, Error)]
pub enum WireError {
    #[error("failed to decode event: {0}")]
    DecodeEvent(#[source] serde_json::Error),

    #[error("failed to encode event: {0}")]
    EncodeEvent(#[source] serde_json::Error),

    #[error("failed to decode command: {0}")]
    DecodeCommand(#[source] serde_json::Error),

    #[error("failed to encode command: {0}")]
    EncodeCommand(#[source] serde_json::Error),
}

/// Decode one inbound event from its JSON payload
pub fn decode_event(payload: &str) -> Result<PanelEvent, WireError> {
    serde_json::from_str(payload).map_err(WireError::DecodeEvent)
}

/// Encode one inbound event as a JSON payload
pub fn encode_event(event: &PanelEvent) -> Result<String, WireError> {
    serde_json::to_string(event).map_err(WireError::EncodeEvent)
}

/// Decode one outbound command from its JSON payload
pub fn decode_command(payload: &str) -> Result<Command, WireError> {
    serde_json::from_str(payload).map_err(WireError::DecodeCommand)
}

/// Encode one outbound command as a JSON payload
pub fn encode_command(command: &Command) -> Result<String, WireError> {
    serde_json::to_string(command).map_err(WireError::EncodeCommand)
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;

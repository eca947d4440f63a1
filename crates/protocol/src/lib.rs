// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire-level data model for the stepview debugger channel.
//!
//! This crate defines the call lifecycle types published by the
//! instrumentation layer, the inbound events the panel consumes, the
//! outbound debugger commands, and the JSON codec for both directions.

mod call;
mod event;
mod wire;

pub use call::{Call, CallBody, CallId, CallState, Exception, LogItem};
pub use event::{Command, PanelEvent, PHASE_PLAYING};
pub use wire::{decode_command, decode_event, encode_command, encode_event, WireError};

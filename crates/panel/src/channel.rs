// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Event pump and outbound command surface.
//!
//! Inbound events arrive on a tokio mpsc channel and are folded into the
//! shared panel in delivery order, which is the ordering guarantee the log
//! exposes. Outbound commands are fire-and-forget: the panel never awaits a
//! result, state updates arrive later as separate events.

use crate::config::PanelConfig;
use crate::panel::PanelHandle;
use stepview_protocol::{CallId, Command, PanelEvent};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors surfaced when emitting a command
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The harness side of the channel has gone away
    #[error("command channel closed")]
    Closed(Command),
}

/// Sink for outbound debugger commands
pub trait CommandSink {
    fn emit(&self, command: Command) -> Result<(), ChannelError>;
}

/// mpsc-backed sink speaking to the harness channel
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Command>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<Command>) -> Self {
        Self { tx }
    }
}

impl CommandSink for ChannelSink {
    fn emit(&self, command: Command) -> Result<(), ChannelError> {
        self.tx.send(command).map_err(|err| ChannelError::Closed(err.0))
    }
}

/// Outbound command surface bound to a story and a sink
pub struct Controller<S: CommandSink> {
    config: PanelConfig,
    sink: S,
}

impl<S: CommandSink> Controller<S> {
    pub fn new(config: PanelConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Restart the scenario from the first call
    pub fn start(&self) -> Result<(), ChannelError> {
        self.emit(Command::Start {
            story_id: self.config.story_id.clone(),
        })
    }

    /// Step back to the previous completed call
    pub fn back(&self) -> Result<(), ChannelError> {
        self.emit(Command::Back {
            story_id: self.config.story_id.clone(),
        })
    }

    /// Step forward to the next waiting call
    pub fn next(&self) -> Result<(), ChannelError> {
        self.emit(Command::Next {
            story_id: self.config.story_id.clone(),
        })
    }

    /// Run through to the end of the scenario
    pub fn end(&self) -> Result<(), ChannelError> {
        self.emit(Command::End {
            story_id: self.config.story_id.clone(),
        })
    }

    /// Jump directly to a specific call
    pub fn goto(&self, call_id: CallId) -> Result<(), ChannelError> {
        self.emit(Command::Goto {
            story_id: self.config.story_id.clone(),
            call_id,
        })
    }

    fn emit(&self, command: Command) -> Result<(), ChannelError> {
        tracing::debug!(?command, "emit command");
        self.sink.emit(command)
    }
}

/// Drain inbound events into the panel in delivery order.
///
/// Runs until the harness drops its sender; a later `sync` always
/// supersedes any in-flight view, so no cancellation handling is needed.
pub async fn pump(panel: PanelHandle, mut events: mpsc::UnboundedReceiver<PanelEvent>) {
    while let Some(event) = events.recv().await {
        panel.apply(event);
    }
    tracing::debug!("event channel closed; pump exiting");
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interaction log store: call bodies plus the ordered transition log.

use std::collections::HashMap;
use stepview_protocol::{Call, CallBody, CallId, CallState, LogItem};

/// Read-side projection of the harness's call lifecycle.
///
/// The store is an event sink, not a transition authority: state transitions
/// are decided by the instrumentation layer and arrive fully formed via
/// `on_call` and `on_sync`. Bodies are keyed by call id (last full update
/// wins); the log sequence is the ground truth for ordering and may hold
/// multiple entries per id, one per transition.
#[derive(Clone, Debug, Default)]
pub struct InteractionLog {
    calls_by_id: HashMap<CallId, CallBody>,
    log: Vec<LogItem>,
}

/// One derived row: a log entry joined with its recorded call body
#[derive(Clone, Debug, PartialEq)]
pub struct Interaction {
    pub call_id: CallId,
    pub state: CallState,

    /// Most recent body seen for this id; absent when the log references a
    /// call whose body event never arrived
    pub body: Option<CallBody>,
}

impl InteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the call body; the state field is tracked through the log.
    /// Never removes existing entries.
    pub fn on_call(&mut self, call: Call) {
        let (body, _) = call.split();
        self.calls_by_id.insert(body.id.clone(), body);
    }

    /// Replace the transition log wholesale. Bodies are left untouched so a
    /// re-run can reuse them before fresh `on_call` events land.
    pub fn on_sync(&mut self, log: Vec<LogItem>) {
        self.log = log;
    }

    /// Derived rows, one per log entry in emission order
    pub fn interactions(&self) -> Vec<Interaction> {
        self.log
            .iter()
            .map(|item| Interaction {
                call_id: item.call_id.clone(),
                state: item.state,
                body: self.calls_by_id.get(&item.call_id).cloned(),
            })
            .collect()
    }

    /// Current transition log, in emission order
    pub fn log(&self) -> &[LogItem] {
        &self.log
    }

    /// Stored body for a call id, if its body event has arrived
    pub fn body(&self, id: &CallId) -> Option<&CallBody> {
        self.calls_by_id.get(id)
    }

    /// Number of stored call bodies
    pub fn body_count(&self) -> usize {
        self.calls_by_id.len()
    }

    /// At least one call is paused or running under step control
    pub fn is_debugging(&self) -> bool {
        self.log.iter().any(|item| item.state.is_pending())
    }

    /// At least one call has completed, so backward navigation has a target
    pub fn has_previous(&self) -> bool {
        self.log.iter().any(|item| item.state.is_completed())
    }

    /// At least one call is queued, so forward navigation has a target
    pub fn has_next(&self) -> bool {
        self.log.iter().any(|item| item.state == CallState::Waiting)
    }

    /// At least one call is currently executing
    pub fn has_active(&self) -> bool {
        self.log.iter().any(|item| item.state == CallState::Active)
    }

    /// At least one call ended in an error
    pub fn has_exception(&self) -> bool {
        self.log.iter().any(|item| item.state == CallState::Error)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Call lifecycle types emitted by the instrumentation layer.

use serde::{Deserialize, Serialize};

/// Unique identifier for an intercepted call, stable across its lifetime
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallId(String);

impl CallId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CallId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CallId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Lifecycle state of a call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallState {
    /// Currently executing
    Active,
    /// Queued under step control, not yet started
    Waiting,
    /// Completed successfully (terminal)
    Done,
    /// Completed with a thrown assertion or exception (terminal)
    Error,
}

impl CallState {
    /// Active or waiting: the call still holds the debugger
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Active | Self::Waiting)
    }

    /// Done or error: an observed completed transition
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Done | Self::Error)
    }
}

/// Failure payload carried by an error-state call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exception {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl Exception {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }
}

/// One intercepted invocation as published by the instrumentation layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub id: CallId,

    /// Display name of the invoked method; opaque to the store
    pub method: String,

    /// Serialized arguments; opaque to the store
    #[serde(default)]
    pub args: Vec<serde_json::Value>,

    pub state: CallState,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<Exception>,
}

impl Call {
    /// Separate the stored body from the transition state.
    ///
    /// The store keeps bodies and tracks state through the log, so the two
    /// halves have different lifetimes.
    pub fn split(self) -> (CallBody, CallState) {
        let state = self.state;
        (
            CallBody {
                id: self.id,
                method: self.method,
                args: self.args,
                exception: self.exception,
            },
            state,
        )
    }
}

/// Call fields retained by the store; state lives in the log
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallBody {
    pub id: CallId,
    pub method: String,

    #[serde(default)]
    pub args: Vec<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<Exception>,
}

/// One observed state transition, in emission order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogItem {
    pub call_id: CallId,
    pub state: CallState,
}

impl LogItem {
    pub fn new(call_id: impl Into<CallId>, state: CallState) -> Self {
        Self {
            call_id: call_id.into(),
            state,
        }
    }
}

#[cfg(test)]
#[path = "call_tests.rs"]
mod tests;

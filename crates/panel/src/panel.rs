// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Control-surface view model over the interaction log.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::store::{Interaction, InteractionLog};
use stepview_protocol::{Call, CallState, LogItem, PanelEvent, PHASE_PLAYING};

/// Panel state: the interaction log plus the externally signaled flags.
///
/// `is_locked` is a logical lock surfaced to the UI (it disables controls),
/// not a concurrency primitive; all mutation happens on the single event
/// pump. A freshly mounted panel assumes the scenario is auto-running until
/// a phase change says otherwise.
#[derive(Clone, Debug)]
pub struct Panel {
    log: InteractionLog,
    is_locked: bool,
    is_playing: bool,
    end_visible: bool,
}

/// Snapshot of the control surface state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub disabled: bool,
    pub has_previous: bool,
    pub has_next: bool,
    pub can_scroll_to_end: bool,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            log: InteractionLog::new(),
            is_locked: false,
            is_playing: true,
            end_visible: true,
        }
    }

    /// Route one inbound event to its handler
    pub fn apply(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::Call(call) => {
                tracing::debug!(id = %call.id, state = ?call.state, "call update");
                self.on_call(call);
            }
            PanelEvent::Sync { log } => {
                tracing::debug!(len = log.len(), "log sync");
                self.on_sync(log);
            }
            PanelEvent::Lock { locked } => {
                tracing::debug!(locked, "lock");
                self.on_lock(locked);
            }
            PanelEvent::PhaseChanged { new_phase } => {
                tracing::debug!(phase = %new_phase, "phase changed");
                self.on_phase_changed(&new_phase);
            }
        }
    }

    pub fn on_call(&mut self, call: Call) {
        self.log.on_call(call);
    }

    pub fn on_sync(&mut self, log: Vec<LogItem>) {
        self.log.on_sync(log);
    }

    pub fn on_lock(&mut self, locked: bool) {
        self.is_locked = locked;
    }

    /// Every phase change clears the lock, not only "playing"; a stale lock
    /// must not survive a re-render.
    pub fn on_phase_changed(&mut self, new_phase: &str) {
        self.is_locked = false;
        self.is_playing = new_phase == PHASE_PLAYING;
    }

    /// Signal from the scroll collaborator: is the end of the list on screen
    pub fn on_end_visible(&mut self, visible: bool) {
        self.end_visible = visible;
    }

    pub fn store(&self) -> &InteractionLog {
        &self.log
    }

    pub fn interactions(&self) -> Vec<Interaction> {
        self.log.interactions()
    }

    pub fn is_locked(&self) -> bool {
        self.is_locked
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Controls are frozen while a call is executing, while the harness
    /// holds the lock, or during autoplay outside of step control. An active
    /// call wins over everything else.
    pub fn is_disabled(&self) -> bool {
        self.log.has_active() || self.is_locked || (self.is_playing && !self.log.is_debugging())
    }

    /// Status shown on the panel's tab icon
    pub fn tab_status(&self) -> CallState {
        if self.log.has_exception() {
            CallState::Error
        } else {
            CallState::Active
        }
    }

    /// Whether the tab icon should be shown at all
    pub fn show_status_badge(&self) -> bool {
        self.log.is_debugging() || (!self.is_playing && self.log.has_exception())
    }

    /// Aggregate status for the subnav header
    pub fn overall_status(&self) -> CallState {
        if self.is_playing {
            CallState::Active
        } else if self.log.has_exception() {
            CallState::Error
        } else {
            CallState::Done
        }
    }

    pub fn controls(&self) -> Controls {
        Controls {
            disabled: self.is_disabled(),
            has_previous: self.log.has_previous(),
            has_next: self.log.has_next(),
            can_scroll_to_end: !self.end_visible,
        }
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared panel state, cloneable across the event pump and readers
#[derive(Clone)]
pub struct PanelHandle {
    inner: Arc<Mutex<Panel>>,
}

impl PanelHandle {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Panel::new())),
        }
    }

    /// Apply one inbound event under the lock
    pub fn apply(&self, event: PanelEvent) {
        self.inner.lock().apply(event);
    }

    /// Read derived state under the lock
    pub fn read<R>(&self, f: impl FnOnce(&Panel) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Mutate panel state under the lock (scroll collaborator, tests)
    pub fn update<R>(&self, f: impl FnOnce(&mut Panel) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl Default for PanelHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interaction step-debugger panel state.
//!
//! A component test harness instruments the scenario under test, intercepts
//! function invocations ("calls"), and publishes their lifecycle on a
//! channel. This crate is the panel's state core: it folds those events into
//! an in-memory projection, derives the booleans behind the debugger control
//! surface (navigation buttons, status icon, failure detail selection), and
//! emits fire-and-forget debugger commands back to the harness.
//!
//! Rendering and styling belong to the embedding UI; everything here is a
//! per-session, in-memory view model.

pub mod channel;
pub mod config;
pub mod matcher;
pub mod panel;
pub mod store;

pub use channel::{pump, ChannelError, ChannelSink, CommandSink, Controller};
pub use config::PanelConfig;
pub use matcher::FailureDetail;
pub use panel::{Controls, Panel, PanelHandle};
pub use store::{Interaction, InteractionLog};

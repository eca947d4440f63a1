// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::matcher::FailureDetail;
use rstest::rstest;
use stepview_protocol::{CallId, Exception};

fn make_call(id: &str, state: CallState) -> Call {
    Call {
        id: CallId::from(id),
        method: "userEvent.click".to_string(),
        args: vec![],
        state,
        exception: None,
    }
}

#[test]
fn test_initial_state_assumes_autoplay() {
    let panel = Panel::new();
    assert!(panel.is_playing());
    assert!(!panel.is_locked());
    // Autoplay with nothing to debug freezes the controls
    assert!(panel.is_disabled());
    assert!(panel.interactions().is_empty());
}

#[rstest]
// An active call freezes controls regardless of lock or autoplay
#[case(true, false, false, true)]
#[case(true, true, true, true)]
// Lock freezes controls even outside autoplay
#[case(false, true, false, true)]
// Autoplay without step control freezes controls
#[case(false, false, true, true)]
// Idle, unlocked, not playing: controls live
#[case(false, false, false, false)]
fn test_is_disabled_precedence(
    #[case] active: bool,
    #[case] locked: bool,
    #[case] playing: bool,
    #[case] disabled: bool,
) {
    let mut panel = Panel::new();

    let state = if active {
        CallState::Active
    } else {
        CallState::Done
    };
    panel.on_sync(vec![LogItem::new("a", state)]);
    panel.on_lock(locked);
    panel.on_phase_changed(if playing { PHASE_PLAYING } else { "completed" });
    // on_phase_changed clears the lock, so reassert it
    panel.on_lock(locked);

    assert_eq!(panel.is_disabled(), disabled);
}

#[test]
fn test_autoplay_with_debugging_keeps_controls_live() {
    let mut panel = Panel::new();
    panel.on_phase_changed(PHASE_PLAYING);
    // A waiting call means we are under step control even while playing
    panel.on_sync(vec![LogItem::new("a", CallState::Waiting)]);

    assert!(!panel.is_disabled());
}

#[rstest]
#[case(PHASE_PLAYING, true)]
#[case("rendering", false)]
#[case("completed", false)]
#[case("errored", false)]
fn test_phase_change_always_clears_lock(#[case] phase: &str, #[case] playing: bool) {
    let mut panel = Panel::new();
    panel.on_lock(true);

    panel.on_phase_changed(phase);

    assert!(!panel.is_locked());
    assert_eq!(panel.is_playing(), playing);
}

#[test]
fn test_sync_empty_resets_predicates_not_bodies() {
    let mut panel = Panel::new();
    panel.on_call(make_call("a", CallState::Error));
    panel.on_sync(vec![LogItem::new("a", CallState::Error)]);
    assert!(panel.store().has_exception());

    panel.on_sync(vec![]);

    let store = panel.store();
    assert!(!store.is_debugging());
    assert!(!store.has_previous());
    assert!(!store.has_next());
    assert!(!store.has_active());
    assert!(!store.has_exception());
    assert_eq!(store.body_count(), 1);
}

#[test]
fn test_single_active_call_scenario() {
    let mut panel = Panel::new();
    panel.on_call(make_call("1", CallState::Active));
    panel.on_sync(vec![LogItem::new("1", CallState::Active)]);

    let rows = panel.interactions();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].state, CallState::Active);
    assert_eq!(rows[0].body.as_ref().unwrap().id.as_str(), "1");

    assert!(panel.store().is_debugging());
    assert!(!panel.store().has_previous());
}

#[test]
fn test_done_and_matcher_error_scenario() {
    let mut panel = Panel::new();
    panel.on_call(make_call("1", CallState::Done));
    let mut failing = make_call("2", CallState::Error);
    failing.exception = Some(Exception::new("expect(received).toBe(expected)"));
    panel.on_call(failing);
    panel.on_sync(vec![
        LogItem::new("1", CallState::Done),
        LogItem::new("2", CallState::Error),
    ]);

    assert!(panel.store().has_exception());
    assert_eq!(panel.tab_status(), CallState::Error);

    let rows = panel.interactions();
    assert!(rows[0].failure_detail().is_none());
    assert!(matches!(
        rows[1].failure_detail(),
        Some(FailureDetail::Matcher(_))
    ));
}

#[test]
fn test_tab_status_without_exception() {
    let mut panel = Panel::new();
    panel.on_sync(vec![LogItem::new("a", CallState::Done)]);
    assert_eq!(panel.tab_status(), CallState::Active);
}

#[rstest]
// Debugging shows the badge regardless of playing
#[case(CallState::Waiting, true, true)]
#[case(CallState::Waiting, false, true)]
// Exception shows the badge only once autoplay has finished
#[case(CallState::Error, true, false)]
#[case(CallState::Error, false, true)]
// A completed run with no failure shows nothing
#[case(CallState::Done, false, false)]
fn test_show_status_badge(#[case] state: CallState, #[case] playing: bool, #[case] shown: bool) {
    let mut panel = Panel::new();
    panel.on_sync(vec![LogItem::new("a", state)]);
    panel.on_phase_changed(if playing { PHASE_PLAYING } else { "completed" });

    assert_eq!(panel.show_status_badge(), shown);
}

#[rstest]
#[case(true, false, CallState::Active)]
#[case(false, true, CallState::Error)]
#[case(false, false, CallState::Done)]
fn test_overall_status(#[case] playing: bool, #[case] errored: bool, #[case] status: CallState) {
    let mut panel = Panel::new();
    panel.on_phase_changed(if playing { PHASE_PLAYING } else { "completed" });
    if errored {
        panel.on_sync(vec![LogItem::new("a", CallState::Error)]);
    }

    assert_eq!(panel.overall_status(), status);
}

#[test]
fn test_controls_snapshot() {
    let mut panel = Panel::new();
    panel.on_phase_changed("completed");
    panel.on_sync(vec![
        LogItem::new("a", CallState::Done),
        LogItem::new("b", CallState::Waiting),
    ]);
    panel.on_end_visible(false);

    assert_eq!(
        panel.controls(),
        Controls {
            disabled: false,
            has_previous: true,
            has_next: true,
            can_scroll_to_end: true,
        }
    );

    panel.on_end_visible(true);
    assert!(!panel.controls().can_scroll_to_end);
}

#[test]
fn test_handle_shares_state() {
    let handle = PanelHandle::new();
    let clone = handle.clone();

    clone.apply(PanelEvent::Sync {
        log: vec![LogItem::new("a", CallState::Done)],
    });

    assert_eq!(handle.read(|panel| panel.interactions().len()), 1);
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure detail classification for error-state rows.

use crate::store::Interaction;
use stepview_protocol::{CallState, Exception};

/// Message prefix identifying a structured matcher failure
const MATCHER_PREFIX: &str = "expect(";

/// Which detail view an error-state call should get
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FailureDetail<'a> {
    /// Structured assertion failure; hand to the matcher formatter
    Matcher(&'a Exception),

    /// Opaque preformatted text
    Raw(&'a str),
}

/// Classify an exception by its message prefix
pub fn classify(exception: &Exception) -> FailureDetail<'_> {
    if exception.message.starts_with(MATCHER_PREFIX) {
        FailureDetail::Matcher(exception)
    } else {
        FailureDetail::Raw(&exception.message)
    }
}

impl Interaction {
    /// Detail view for this row, if any.
    ///
    /// Only error-state rows carrying an exception get a detail view; an
    /// error row without one degrades to the status icon alone.
    pub fn failure_detail(&self) -> Option<FailureDetail<'_>> {
        if self.state != CallState::Error {
            return None;
        }
        self.body.as_ref()?.exception.as_ref().map(classify)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;

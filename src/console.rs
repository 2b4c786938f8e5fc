/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Append-only console sink.
//!
//! Every panel controller reports through here: one timestamped,
//! severity-tagged line per `log` call, strict append order, and a
//! `clear` that resets the pane for the next operation. The view
//! auto-scrolls so the newest line is always visible (see
//! `render::console_pane`).

use std::collections::VecDeque;

use crate::format::clock_time;
use crate::model::ConsoleLine;
use crate::model::Severity;

/// Retention bound for long sessions. Each controller clears the
/// console before logging, so this only matters when a single action
/// produces a very large burst (e.g. verbose container logs).
pub(crate) const CONSOLE_CAP: usize = 500;

/// The console sink. Owned by `App`; written only from the event
/// loop.
#[derive(Debug, Default)]
pub(crate) struct Console {
    lines: VecDeque<ConsoleLine>,
}

impl Console {
    pub(crate) fn new() -> Self {
        Self {
            lines: VecDeque::new(),
        }
    }

    /// Append one line stamped with the current wall-clock time.
    ///
    /// Evicts the oldest line beyond [`CONSOLE_CAP`].
    pub(crate) fn log(&mut self, severity: Severity, text: impl Into<String>) {
        self.lines.push_back(ConsoleLine {
            stamp: clock_time(),
            severity,
            text: text.into(),
        });
        while self.lines.len() > CONSOLE_CAP {
            self.lines.pop_front();
        }
    }

    pub(crate) fn info(&mut self, text: impl Into<String>) {
        self.log(Severity::Info, text);
    }

    pub(crate) fn error(&mut self, text: impl Into<String>) {
        self.log(Severity::Error, text);
    }

    /// Remove all lines.
    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }

    pub(crate) fn lines(&self) -> impl Iterator<Item = &ConsoleLine> {
        self.lines.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

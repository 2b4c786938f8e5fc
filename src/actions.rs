/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

/// Network-backed panel actions. Each maps to exactly one fixed
/// backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum PanelAction {
    /// Startup health probe (fire-and-forget, no console clear).
    Health,
    /// Container status check.
    Status,
    /// Path discovery from AS111 to AS211.
    Paths,
    /// SCION ping from AS111 to AS110.
    Ping,
    /// Recent control-service log refresh.
    Logs,
}

impl PanelAction {
    /// Backend-relative endpoint for this action.
    pub(crate) fn endpoint(self) -> &'static str {
        match self {
            PanelAction::Health => "/api/health",
            PanelAction::Status => "/api/status",
            PanelAction::Paths => "/api/paths",
            PanelAction::Ping => "/api/ping",
            PanelAction::Logs => "/api/logs",
        }
    }
}

/// Result of handling a key event.
pub(crate) enum KeyResult {
    /// Nothing for the event loop to do.
    None,
    /// Start the shared panel protocol for a network-backed action.
    Dispatch(PanelAction),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_namespaced_and_nonempty() {
        for action in [
            PanelAction::Health,
            PanelAction::Status,
            PanelAction::Paths,
            PanelAction::Ping,
            PanelAction::Logs,
        ] {
            assert!(action.endpoint().starts_with("/api/"));
        }
    }
}

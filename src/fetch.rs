/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Request sequencing for the panel controllers.
//!
//! Every network-backed action issues a fresh token before its fetch
//! task is spawned; the task delivers a [`FetchOutcome`] carrying that
//! token back to the event loop over an mpsc channel. The app applies
//! an outcome only if the token is still the latest one issued for
//! its action, so a slow older response can never overwrite the
//! effect of a newer click. In-flight requests are not cancelled and
//! never retried.

use std::collections::HashMap;

use tokio::sync::mpsc::UnboundedSender;

use crate::actions::PanelAction;
use crate::client::Gateway;
use crate::model::HealthResponse;
use crate::model::LogsResponse;
use crate::model::PathsResponse;
use crate::model::PingResponse;
use crate::model::StatusResponse;

/// Latest-token registry, one slot per action.
///
/// Tokens are globally monotonic so equality against the recorded
/// slot is the only currency check needed.
#[derive(Debug, Default)]
pub(crate) struct Tokens {
    latest: HashMap<PanelAction, u64>,
    next: u64,
}

impl Tokens {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for `action`, superseding any outstanding
    /// one.
    pub(crate) fn issue(&mut self, action: PanelAction) -> u64 {
        self.next += 1;
        self.latest.insert(action, self.next);
        self.next
    }

    /// Whether `token` is still the latest issued for `action`.
    pub(crate) fn is_current(&self, action: PanelAction, token: u64) -> bool {
        self.latest.get(&action) == Some(&token)
    }
}

/// Decoded payload of a completed fetch, one variant per action.
#[derive(Debug, Clone)]
pub(crate) enum FetchPayload {
    Health(HealthResponse),
    Status(StatusResponse),
    Paths(PathsResponse),
    Ping(PingResponse),
    Logs(LogsResponse),
}

/// Message a fetch task sends back to the event loop.
#[derive(Debug)]
pub(crate) struct FetchOutcome {
    pub(crate) action: PanelAction,
    pub(crate) token: u64,
    pub(crate) result: Result<FetchPayload, String>,
}

/// Spawn the single GET for `action` and deliver its outcome.
///
/// The send fails only when the event loop has already shut down, in
/// which case the outcome is moot.
pub(crate) fn spawn_fetch(
    gateway: Gateway,
    action: PanelAction,
    token: u64,
    tx: UnboundedSender<FetchOutcome>,
) {
    tokio::spawn(async move {
        let result = fetch_payload(&gateway, action).await;
        let _ = tx.send(FetchOutcome {
            action,
            token,
            result,
        });
    });
}

/// Run the GET for one action against its fixed endpoint.
pub(crate) async fn fetch_payload(
    gateway: &Gateway,
    action: PanelAction,
) -> Result<FetchPayload, String> {
    let path = action.endpoint();
    match action {
        PanelAction::Health => gateway
            .call::<HealthResponse>(path)
            .await
            .map(FetchPayload::Health),
        PanelAction::Status => gateway
            .call::<StatusResponse>(path)
            .await
            .map(FetchPayload::Status),
        PanelAction::Paths => gateway
            .call::<PathsResponse>(path)
            .await
            .map(FetchPayload::Paths),
        PanelAction::Ping => gateway
            .call::<PingResponse>(path)
            .await
            .map(FetchPayload::Ping),
        PanelAction::Logs => gateway
            .call::<LogsResponse>(path)
            .await
            .map(FetchPayload::Logs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_is_current() {
        let mut tokens = Tokens::new();
        let t = tokens.issue(PanelAction::Status);
        assert!(tokens.is_current(PanelAction::Status, t));
    }

    #[test]
    fn reissue_supersedes_previous_token() {
        let mut tokens = Tokens::new();
        let t1 = tokens.issue(PanelAction::Paths);
        let t2 = tokens.issue(PanelAction::Paths);
        assert!(!tokens.is_current(PanelAction::Paths, t1));
        assert!(tokens.is_current(PanelAction::Paths, t2));
    }

    #[test]
    fn tokens_are_tracked_per_action() {
        let mut tokens = Tokens::new();
        let status = tokens.issue(PanelAction::Status);
        let paths = tokens.issue(PanelAction::Paths);
        assert!(tokens.is_current(PanelAction::Status, status));
        assert!(tokens.is_current(PanelAction::Paths, paths));
        assert!(!tokens.is_current(PanelAction::Status, paths));
    }

    #[test]
    fn unissued_action_has_no_current_token() {
        let tokens = Tokens::new();
        assert!(!tokens.is_current(PanelAction::Logs, 0));
        assert!(!tokens.is_current(PanelAction::Logs, 1));
    }
}

/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use serde::Deserialize;

/// The four AS identifiers of the demo topology.
///
/// Keeping this an enum (rather than a string key) makes "select an
/// unknown AS" unrepresentable: every value carries a registry entry
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum AsId {
    As110,
    As111,
    As210,
    As211,
}

impl AsId {
    /// All identifiers, in diagram order.
    pub(crate) const ALL: [AsId; 4] = [AsId::As110, AsId::As111, AsId::As210, AsId::As211];

    /// The short numeric identifier used by the original diagram
    /// markup (e.g. "110").
    pub(crate) fn number(self) -> &'static str {
        match self {
            AsId::As110 => "110",
            AsId::As111 => "111",
            AsId::As210 => "210",
            AsId::As211 => "211",
        }
    }
}

impl std::fmt::Display for AsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AS{}", self.number())
    }
}

/// Role of an AS within its ISD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AsRole {
    /// Provides the connectivity backbone and inter-ISD links.
    Core,
    /// Non-core end-user network.
    Leaf,
}

impl AsRole {
    pub(crate) fn label(self) -> &'static str {
        match self {
            AsRole::Core => "Core AS",
            AsRole::Leaf => "Leaf AS",
        }
    }
}

/// Immutable descriptive record for one AS.
///
/// Fixed at compile time; the registry never mutates or removes
/// entries. Keys are exactly the node identifiers the topology pane
/// draws.
#[derive(Debug)]
pub(crate) struct AsRecord {
    pub(crate) id: AsId,
    /// Full SCION address (e.g. "1-ff00:0:110").
    pub(crate) scion_address: &'static str,
    pub(crate) display_name: &'static str,
    pub(crate) isd_label: &'static str,
    pub(crate) ip_address: &'static str,
    pub(crate) role: AsRole,
    /// Docker container backing this AS in the demo deployment.
    pub(crate) container_name: &'static str,
    /// Services running inside the AS, in display order.
    pub(crate) services: &'static [&'static str],
    pub(crate) description: &'static str,
}

/// Topic keys for the educational modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum EduTopic {
    Isd,
    As,
    Path,
    Beacon,
}

/// One educational text block, keyed by [`EduTopic`].
#[derive(Debug)]
pub(crate) struct EduEntry {
    pub(crate) title: &'static str,
    pub(crate) body: &'static str,
}

/// The three identified (highlightable) links of the topology
/// diagram.
///
/// The peer link 111–211 is drawn but carries no identifier, matching
/// the original markup where only these three elements can receive
/// the path highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkId {
    /// Core link between the two ISDs.
    Core110To210,
    /// Parent/child link inside ISD 1.
    Child110To111,
    /// Parent/child link inside ISD 2.
    Child210To211,
}

impl LinkId {
    /// The fixed trio highlighted after a successful path discovery.
    pub(crate) const DEMO_PATH: [LinkId; 3] = [
        LinkId::Child110To111,
        LinkId::Core110To210,
        LinkId::Child210To211,
    ];

    /// Endpoints of the link, both guaranteed to be registry keys.
    pub(crate) fn endpoints(self) -> (AsId, AsId) {
        match self {
            LinkId::Core110To210 => (AsId::As110, AsId::As210),
            LinkId::Child110To111 => (AsId::As110, AsId::As111),
            LinkId::Child210To211 => (AsId::As210, AsId::As211),
        }
    }
}

/// Severity class of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Info,
    Error,
}

/// One timestamped line in the console sink.
#[derive(Debug, Clone)]
pub(crate) struct ConsoleLine {
    /// Local wall-clock time at append, formatted HH:MM:SS.
    pub(crate) stamp: String,
    pub(crate) severity: Severity,
    pub(crate) text: String,
}

// Typed payloads for the backend HTTP surface.
//
// All collection and string fields default, so a response missing the
// expected field decodes to the empty shape and lands in the
// per-action "no data" branch instead of failing the whole call.

/// `GET /api/health` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct HealthResponse {
    #[serde(default)]
    pub(crate) status: String,
}

/// One container row of a `GET /api/status` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ContainerStatus {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) status: String,
}

/// `GET /api/status` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct StatusResponse {
    #[serde(default)]
    pub(crate) containers: Vec<ContainerStatus>,
}

/// One discovered path of a `GET /api/paths` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PathEntry {
    #[serde(default)]
    pub(crate) hops: u32,
    #[serde(default)]
    pub(crate) route: String,
}

/// `GET /api/paths` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PathsResponse {
    #[serde(default)]
    pub(crate) paths: Vec<PathEntry>,
}

/// `GET /api/ping` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PingResponse {
    #[serde(default)]
    pub(crate) output: String,
    #[serde(default)]
    pub(crate) success: bool,
}

/// `GET /api/logs` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct LogsResponse {
    #[serde(default)]
    pub(crate) logs: Vec<String>,
}

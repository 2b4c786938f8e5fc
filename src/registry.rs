/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Static, read-only registries for the demo network.
//!
//! Two lookup tables fixed at compile time: the AS metadata records
//! backing the topology diagram and detail pane, and the educational
//! text blocks shown by the help modal. Nothing here mutates after
//! load.

use crate::model::AsId;
use crate::model::AsRecord;
use crate::model::AsRole;
use crate::model::EduEntry;
use crate::model::EduTopic;

static AS_RECORDS: [AsRecord; 4] = [
    AsRecord {
        id: AsId::As110,
        scion_address: "1-ff00:0:110",
        display_name: "AS 110 (Core)",
        isd_label: "ISD 1 - Academic Network",
        ip_address: "172.20.0.10",
        role: AsRole::Core,
        container_name: "scion-as110",
        services: &["Control Service", "Border Router", "SCION Daemon"],
        description: "Core AS in ISD 1. Provides transit services and maintains core links.",
    },
    AsRecord {
        id: AsId::As111,
        scion_address: "1-ff00:0:111",
        display_name: "AS 111 (Leaf)",
        isd_label: "ISD 1 - Academic Network",
        ip_address: "172.20.0.20",
        role: AsRole::Leaf,
        container_name: "scion-as111",
        services: &[
            "Control Service",
            "Border Router",
            "SCION Daemon",
            "End Host",
        ],
        description: "Leaf AS in ISD 1. Connected to core via parent link, peering with AS211.",
    },
    AsRecord {
        id: AsId::As210,
        scion_address: "2-ff00:0:210",
        display_name: "AS 210 (Core)",
        isd_label: "ISD 2 - Commercial Network",
        ip_address: "172.20.0.30",
        role: AsRole::Core,
        container_name: "scion-as210",
        services: &["Control Service", "Border Router", "SCION Daemon"],
        description: "Core AS in ISD 2. Connected to AS110 via core link.",
    },
    AsRecord {
        id: AsId::As211,
        scion_address: "2-ff00:0:211",
        display_name: "AS 211 (Leaf)",
        isd_label: "ISD 2 - Commercial Network",
        ip_address: "172.20.0.40",
        role: AsRole::Leaf,
        container_name: "scion-as211",
        services: &[
            "Control Service",
            "Border Router",
            "SCION Daemon",
            "End Host",
        ],
        description: "Leaf AS in ISD 2. Connected to core via parent link, peering with AS111.",
    },
];

/// Look up the record for an AS identifier.
///
/// Total by construction: every [`AsId`] has exactly one entry.
pub(crate) fn as_record(id: AsId) -> &'static AsRecord {
    match id {
        AsId::As110 => &AS_RECORDS[0],
        AsId::As111 => &AS_RECORDS[1],
        AsId::As210 => &AS_RECORDS[2],
        AsId::As211 => &AS_RECORDS[3],
    }
}

static EDU_ENTRIES: [(EduTopic, EduEntry); 4] = [
    (
        EduTopic::Isd,
        EduEntry {
            title: "🏢 Isolation Domain (ISD)",
            body: "An ISD is a group of ASes under a common trust domain.\n\
                   \n\
                   Each ISD has:\n\
                   • Core ASes - provide the connectivity backbone\n\
                   • Trust Root Configuration (TRC) - defines trust anchors\n\
                   • Independent governance - controls policies within its domain\n\
                   \n\
                   In this network:\n\
                   • ISD 1 = Academic Network (AS110, AS111)\n\
                   • ISD 2 = Commercial Network (AS210, AS211)",
        },
    ),
    (
        EduTopic::As,
        EduEntry {
            title: "🔗 Autonomous System (AS)",
            body: "An AS is a network under single administrative control.\n\
                   \n\
                   SCION AS types:\n\
                   • Core AS - provides inter-ISD connectivity\n\
                   • Non-Core (Leaf) AS - end-user networks\n\
                   \n\
                   Each AS runs:\n\
                   • Control Service - manages paths and certificates\n\
                   • Border Router - forwards SCION packets\n\
                   • SCION Daemon - local path queries",
        },
    ),
    (
        EduTopic::Path,
        EduEntry {
            title: "🛤️ Packet-Carried Forwarding State (PCFS)",
            body: "In SCION, each packet carries its complete path.\n\
                   \n\
                   Key benefits:\n\
                   • No routing tables - routers just follow the embedded path\n\
                   • Path transparency - the sender knows the exact route\n\
                   • Multi-path - different paths can be used simultaneously\n\
                   • Fast failover - switch paths without waiting for convergence\n\
                   \n\
                   The sender chooses which path to use based on latency,\n\
                   bandwidth, or trust requirements.",
        },
    ),
    (
        EduTopic::Beacon,
        EduEntry {
            title: "📡 Beaconing Process",
            body: "Core ASes originate beacons that propagate through the network.\n\
                   \n\
                   How it works:\n\
                   1. Core ASes create and sign beacons\n\
                   2. Non-core ASes receive, extend, and forward beacons\n\
                   3. Control Services register paths from beacons\n\
                   4. The SCION Daemon queries for available paths\n\
                   \n\
                   Beaconing happens continuously, so the network converges\n\
                   within seconds.",
        },
    ),
];

/// Look up the educational entry for a topic, if one exists.
///
/// Kept fallible even though every [`EduTopic`] currently has an
/// entry: a miss is a silent no-op at the call site, never an error.
pub(crate) fn edu_entry(topic: EduTopic) -> Option<&'static EduEntry> {
    EDU_ENTRIES
        .iter()
        .find(|(key, _)| *key == topic)
        .map(|(_, entry)| entry)
}

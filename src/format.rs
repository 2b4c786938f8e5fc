/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

/// Current local wall-clock time as HH:MM:SS, for console line
/// stamps.
pub(crate) fn clock_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Whether a container status string indicates a running container.
///
/// Matches the "Up ..." prefix Docker reports for running containers
/// anywhere in the text, e.g. "Up 2 hours (healthy)".
pub(crate) fn is_up_status(status: &str) -> bool {
    status.contains("Up")
}

/// Format one container status line with its health marker.
pub(crate) fn status_line(name: &str, status: &str) -> String {
    let marker = if is_up_status(status) { "✅" } else { "❌" };
    format!("{} {}: {}", marker, name, status)
}

/// Heading for a discovered path, 1-based.
pub(crate) fn path_heading(index: usize, hops: u32) -> String {
    format!("Path {} ({} hops)", index + 1, hops)
}

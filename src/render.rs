/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Rendering. Pure functions from [`App`] state to ratatui widgets;
//! nothing in here mutates the app.

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;

use crate::app::App;

pub(crate) mod console_pane;
pub(crate) mod detail_pane;
pub(crate) mod modal;
pub(crate) mod path_pane;
pub(crate) mod status_bar;
pub(crate) mod topology_pane;

/// Draw one frame.
///
/// Header, body, footer; the body splits into the topology/detail
/// column and the paths/console column. The modal overlay, when
/// open, is drawn last so it sits on top of everything.
pub(crate) fn ui(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    status_bar::render_header(frame, app, header);
    status_bar::render_footer(frame, app, footer);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body);

    let [topology, detail] =
        Layout::vertical([Constraint::Length(13), Constraint::Min(5)]).areas(left);
    topology_pane::render(frame, app, topology);
    detail_pane::render(frame, app, detail);

    if app.paths_visible {
        let [paths, console] =
            Layout::vertical([Constraint::Percentage(40), Constraint::Min(5)]).areas(right);
        path_pane::render(frame, app, paths);
        console_pane::render(frame, app, console);
    } else {
        console_pane::render(frame, app, right);
    }

    if app.modal.is_some() {
        modal::render(frame, app, frame.area());
    }
}

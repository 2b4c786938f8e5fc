/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Path list pane, shown only after a discovery returned at least
//! one path.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;

use crate::app::App;
use crate::format;

pub(crate) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(app.paths.len() * 2);
    for (index, path) in app.paths.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format::path_heading(index, path.hops),
            app.theme.scheme.path_heading,
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", path.route),
            app.theme.scheme.path_route,
        )));
    }

    let block = Block::bordered()
        .title(app.theme.labels.pane_paths)
        .border_style(app.theme.scheme.border);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

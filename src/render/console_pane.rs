/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Scrolling console pane. Always pinned to the newest line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::model::Severity;

pub(crate) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .console
        .lines()
        .map(|line| {
            let text_style = match line.severity {
                Severity::Info => app.theme.scheme.console_info,
                Severity::Error => app.theme.scheme.console_error,
            };
            Line::from(vec![
                Span::styled(format!("[{}] ", line.stamp), app.theme.scheme.console_stamp),
                Span::styled(line.text.as_str(), text_style),
            ])
        })
        .collect();

    let block = Block::bordered()
        .title(app.theme.labels.pane_console)
        .border_style(app.theme.scheme.border);

    // Auto-scroll: offset so the newest line is always inside the
    // inner area.
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    frame.render_widget(
        Paragraph::new(lines).scroll((scroll, 0)).block(block),
        area,
    );
}

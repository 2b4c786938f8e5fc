/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Educational modal overlay.
//!
//! `modal_area` is shared with the mouse handler: a press outside
//! this rectangle counts as a backdrop click and closes the modal.

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::layout::Flex;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;

use crate::app::App;
use crate::registry;

/// Centered content rectangle of the modal within `area`.
pub(crate) fn modal_area(area: Rect) -> Rect {
    let [horizontal] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(horizontal);
    centered
}

pub(crate) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(topic) = app.modal else {
        return;
    };
    // Topics without an entry never get this far (open_help checks),
    // but a miss here stays a silent no-op all the same.
    let Some(entry) = registry::edu_entry(topic) else {
        return;
    };

    let target = modal_area(area);
    frame.render_widget(Clear, target);

    let mut lines: Vec<Line> = Vec::new();
    for text in entry.body.lines() {
        lines.push(Line::from(Span::styled(text, app.theme.scheme.modal_body)));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        app.theme.labels.modal_close_hint,
        app.theme.scheme.footer_help,
    )));

    let block = Block::bordered()
        .title(Span::styled(entry.title, app.theme.scheme.modal_title))
        .border_style(app.theme.scheme.modal_border);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        target,
    );
}

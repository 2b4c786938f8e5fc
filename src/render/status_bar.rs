/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Header line (app name, backend URL, current selection) and the
//! footer key help.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;

use crate::app::App;

pub(crate) fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let labels = &app.theme.labels;
    let scheme = &app.theme.scheme;

    let selection = match app.selected {
        Some(id) => id.to_string(),
        None => "—".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(labels.app_name, scheme.app_name),
        Span::styled(labels.separator, scheme.border),
        Span::styled(app.gateway.base_url.as_str(), scheme.stat_url),
        Span::styled(labels.separator, scheme.border),
        Span::styled(selection, scheme.stat_selection),
    ]);

    let block = Block::bordered().border_style(scheme.border);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

pub(crate) fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(Span::styled(
        app.theme.labels.footer_help_text,
        app.theme.scheme.footer_help,
    ));
    frame.render_widget(Paragraph::new(line), area);
}

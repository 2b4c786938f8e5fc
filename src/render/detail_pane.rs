/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Detail pane for the selected AS record.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;

use crate::app::App;
use crate::registry;

fn field<'a>(app: &'a App, label: &'static str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, app.theme.scheme.detail_label),
        Span::styled(value, app.theme.scheme.detail_value),
    ])
}

pub(crate) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let labels = &app.theme.labels;
    let block = Block::bordered()
        .title(labels.pane_details)
        .border_style(app.theme.scheme.border);

    let lines = match app.selected {
        None => vec![
            Line::default(),
            Line::from(Span::styled(labels.no_selection, app.theme.scheme.footer_help)),
        ],
        Some(id) => {
            let record = registry::as_record(id);
            let services = record.services.join(", ");
            vec![
                Line::from(Span::styled(
                    record.display_name,
                    app.theme.scheme.stat_selection,
                )),
                Line::default(),
                field(app, labels.scion_address, record.scion_address),
                field(app, labels.ip_address, record.ip_address),
                field(app, labels.isd, record.isd_label),
                field(app, labels.as_type, record.role.label()),
                field(app, labels.container, record.container_name),
                Line::from(vec![
                    Span::styled(labels.services, app.theme.scheme.detail_label),
                    Span::styled(services, app.theme.scheme.detail_value),
                ]),
                Line::default(),
                Line::from(Span::styled(record.description, app.theme.scheme.footer_help)),
            ]
        }
    };

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

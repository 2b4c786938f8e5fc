/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The fixed topology diagram: two ISDs, four AS nodes, three
//! identified links plus the unidentified peer link.
//!
//! The diagram never changes shape. Selection bolds one node, and the
//! three identified links light up while the path highlight is
//! active.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::model::AsId;
use crate::model::LinkId;
use crate::registry;

/// Node label with its selection caret, e.g. "▸ AS110 (Core)".
fn node_span<'a>(app: &'a App, id: AsId) -> Span<'a> {
    let record = registry::as_record(id);
    let selected = app.selected == Some(id);
    let style = if selected {
        app.theme.scheme.node_selected
    } else {
        app.theme.scheme.node_style(record.role)
    };
    let caret = if selected {
        app.theme.labels.selection_caret
    } else {
        "  "
    };
    Span::styled(format!("{}{}", caret, record.display_name), style)
}

fn link_style(app: &App, link: LinkId) -> Style {
    if app.link_highlight_active() && LinkId::DEMO_PATH.contains(&link) {
        app.theme.scheme.link_highlight
    } else {
        app.theme.scheme.link_normal
    }
}

pub(crate) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let caption = app.theme.scheme.isd_caption;
    let core = link_style(app, LinkId::Core110To210);
    let child1 = link_style(app, LinkId::Child110To111);
    let child2 = link_style(app, LinkId::Child210To211);
    let peer = app.theme.scheme.link_normal;

    // Fixed four-node diagram. The 110—210 core link, and the two
    // parent/child links below, are the three highlightable elements;
    // the 111—211 peer link never lights up.
    let lines = vec![
        Line::from(Span::styled("   ISD 1 - Academic        ISD 2 - Commercial", caption)),
        Line::default(),
        Line::from(vec![
            Span::raw("  "),
            node_span(app, AsId::As110),
            Span::styled(" ═════════ ", core),
            node_span(app, AsId::As210),
        ]),
        Line::from(vec![
            Span::raw("        "),
            Span::styled("│", child1),
            Span::raw("                        "),
            Span::styled("│", child2),
        ]),
        Line::from(vec![
            Span::raw("        "),
            Span::styled("│", child1),
            Span::raw("                        "),
            Span::styled("│", child2),
        ]),
        Line::from(vec![
            Span::raw("  "),
            node_span(app, AsId::As111),
            Span::raw("           "),
            node_span(app, AsId::As211),
        ]),
        Line::from(vec![
            Span::raw("        "),
            Span::styled("└╌╌╌╌╌╌ peering ╌╌╌╌╌╌┘", peer),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "   ═ core   │ parent/child   ╌ peer",
            app.theme.scheme.footer_help,
        )),
    ];

    let block = Block::bordered()
        .title(app.theme.labels.pane_topology)
        .border_style(app.theme.scheme.border);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

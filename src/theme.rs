/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

use crate::model::AsRole;

/// Selectable color theme.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum ThemeName {
    /// Nord — an arctic, north-bluish color palette.
    #[default]
    Nord,
    /// doom-nord-light — desaturated Nord accents for light backgrounds.
    DoomNordLight,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Nord => write!(f, "nord"),
            ThemeName::DoomNordLight => write!(f, "doom-nord-light"),
        }
    }
}

/// Selectable display language.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum LangName {
    /// English (default).
    #[default]
    En,
    /// 简体中文 (Simplified Chinese).
    Zh,
}

impl std::fmt::Display for LangName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LangName::En => write!(f, "en"),
            LangName::Zh => write!(f, "zh"),
        }
    }
}

/// Command-line arguments for the dashboard.
#[derive(Debug, Parser)]
#[command(
    name = "scion-lab-tui",
    about = "Terminal dashboard for the SCION demo network backend"
)]
pub(crate) struct Args {
    /// Backend address (e.g., 127.0.0.1:8080, or an explicit
    /// http:// / https:// URL)
    #[arg(long, short, default_value = "127.0.0.1:8080")]
    pub(crate) addr: String,

    /// Color theme
    #[arg(long, default_value_t = ThemeName::Nord, value_enum)]
    pub(crate) theme: ThemeName,

    /// Display language
    #[arg(long, default_value_t = LangName::En, value_enum)]
    pub(crate) lang: LangName,

    /// Write tracing output to this file (stdout belongs to the TUI);
    /// level via RUST_LOG
    #[arg(long)]
    pub(crate) log_file: Option<PathBuf>,
}

/// All user-visible chrome text in the TUI.
///
/// Gathered into a single struct so that localisation (or
/// white-labelling) is a drop-in replacement — construct an
/// alternative `Labels` and pass it to `App`.
pub(crate) struct Labels {
    // App identity
    pub(crate) app_name: &'static str,

    // Chrome / decoration
    pub(crate) separator: &'static str,
    pub(crate) selection_caret: &'static str,
    pub(crate) no_selection: &'static str,

    // Detail pane labels
    pub(crate) scion_address: &'static str,
    pub(crate) ip_address: &'static str,
    pub(crate) isd: &'static str,
    pub(crate) as_type: &'static str,
    pub(crate) container: &'static str,
    pub(crate) services: &'static str,

    // Pane titles
    pub(crate) pane_topology: &'static str,
    pub(crate) pane_details: &'static str,
    pub(crate) pane_paths: &'static str,
    pub(crate) pane_console: &'static str,

    // Modal
    pub(crate) modal_close_hint: &'static str,

    // Footer
    pub(crate) footer_help_text: &'static str,
}

impl Labels {
    /// English (default) label set.
    pub(crate) fn en() -> Self {
        Self {
            app_name: "scion-lab",
            separator: " • ",
            selection_caret: "▸ ",
            no_selection: "No AS selected — press 1-4",
            scion_address: "SCION Address: ",
            ip_address: "IP Address: ",
            isd: "ISD: ",
            as_type: "Type: ",
            container: "Container: ",
            services: "Services: ",
            pane_topology: "Topology",
            pane_details: "AS Details",
            pane_paths: "Paths",
            pane_console: "Console",
            modal_close_hint: "Enter/Esc: close",
            footer_help_text: "q: quit | s: status | p: paths | n: ping | l: logs | 1-4: select AS | i/a/t/b: help",
        }
    }

    /// 简体中文 (Simplified Chinese) label set.
    pub(crate) fn zh() -> Self {
        Self {
            app_name: "scion-lab",
            separator: " • ",
            selection_caret: "▸ ",
            no_selection: "未选择 AS — 按 1-4",
            scion_address: "SCION 地址: ",
            ip_address: "IP 地址: ",
            isd: "ISD: ",
            as_type: "类型: ",
            container: "容器: ",
            services: "服务: ",
            pane_topology: "拓扑",
            pane_details: "AS 详情",
            pane_paths: "路径",
            pane_console: "控制台",
            modal_close_hint: "Enter/Esc: 关闭",
            footer_help_text: "q: 退出 | s: 状态 | p: 路径 | n: ping | l: 日志 | 1-4: 选择 AS | i/a/t/b: 帮助",
        }
    }
}

/// Color scheme for the TUI.
///
/// Each field maps to a semantic role, not a specific color. Themes
/// assign concrete colors to these roles while preserving the
/// following intent:
///
/// - **Topology**: core vs. leaf AS nodes, link lines
/// - **Selection/focus**: the currently selected node
/// - **Highlight**: the transient path highlight on demo links
/// - **Console**: info vs. error line severities
/// - **Secondary**: URLs, labels, borders, muted text
pub(crate) struct ColorScheme {
    // UI chrome
    pub(crate) app_name: Style,
    pub(crate) border: Style,
    pub(crate) footer_help: Style,

    // Topology pane
    pub(crate) node_core: Style,
    pub(crate) node_leaf: Style,
    pub(crate) node_selected: Style,
    pub(crate) link_normal: Style,
    pub(crate) link_highlight: Style,
    pub(crate) isd_caption: Style,

    // Console severities
    pub(crate) console_info: Style,
    pub(crate) console_error: Style,
    pub(crate) console_stamp: Style,

    // Detail/path panes
    pub(crate) detail_label: Style,
    pub(crate) detail_value: Style,
    pub(crate) path_heading: Style,
    pub(crate) path_route: Style,

    // Header stats
    pub(crate) stat_selection: Style,
    pub(crate) stat_url: Style,

    // Modal
    pub(crate) modal_title: Style,
    pub(crate) modal_border: Style,
    pub(crate) modal_body: Style,
}

impl ColorScheme {
    /// Nord color scheme (https://www.nordtheme.com/).
    ///
    /// An arctic, north-bluish palette with muted, harmonious colors.
    pub(crate) fn nord() -> Self {
        // Polar Night (dark backgrounds)
        let polar3 = Color::Rgb(76, 86, 106); // #4C566A
        // Snow Storm (light text)
        let snow0 = Color::Rgb(216, 222, 233); // #D8DEE9
        let snow2 = Color::Rgb(236, 239, 244); // #ECEFF4
        // Frost (blues/cyans)
        let frost_teal = Color::Rgb(143, 188, 187); // #8FBCBB
        let frost_cyan = Color::Rgb(136, 192, 208); // #88C0D0
        let frost_blue = Color::Rgb(129, 161, 193); // #81A1C1
        // Aurora (accents)
        let aurora_red = Color::Rgb(191, 97, 106); // #BF616A
        let aurora_yellow = Color::Rgb(235, 203, 139); // #EBCB8B
        let aurora_green = Color::Rgb(163, 190, 140); // #A3BE8C
        let aurora_purple = Color::Rgb(180, 142, 173); // #B48EAD

        Self {
            app_name: Style::default().fg(frost_cyan).add_modifier(Modifier::BOLD),
            border: Style::default().fg(polar3),
            footer_help: Style::default().fg(polar3),

            node_core: Style::default().fg(frost_teal),
            node_leaf: Style::default().fg(aurora_green),
            node_selected: Style::default()
                .fg(aurora_purple)
                .add_modifier(Modifier::BOLD),
            link_normal: Style::default().fg(polar3),
            link_highlight: Style::default()
                .fg(aurora_yellow)
                .add_modifier(Modifier::BOLD),
            isd_caption: Style::default().fg(frost_blue),

            console_info: Style::default().fg(snow0),
            console_error: Style::default().fg(aurora_red),
            console_stamp: Style::default().fg(polar3),

            detail_label: Style::default().fg(snow0),
            detail_value: Style::default().fg(snow2),
            path_heading: Style::default()
                .fg(frost_cyan)
                .add_modifier(Modifier::BOLD),
            path_route: Style::default().fg(snow0),

            stat_selection: Style::default().fg(aurora_purple),
            stat_url: Style::default().fg(polar3),

            modal_title: Style::default().fg(frost_cyan).add_modifier(Modifier::BOLD),
            modal_border: Style::default().fg(frost_cyan),
            modal_body: Style::default().fg(snow2),
        }
    }

    /// doom-nord-light color scheme.
    ///
    /// Desaturated Nord accents adapted for light backgrounds.
    /// Source: doom-nord-light-theme.el
    pub(crate) fn doom_nord_light() -> Self {
        // Base scale (light to dark)
        let base7 = Color::Rgb(96, 114, 140); // #60728C
        // Foreground
        let fg = Color::Rgb(59, 66, 82); // #3B4252
        let fg_alt = Color::Rgb(46, 52, 64); // #2E3440
        // Accents
        let red = Color::Rgb(153, 50, 75); // #99324B
        let green = Color::Rgb(79, 137, 76); // #4F894C
        let yellow = Color::Rgb(154, 117, 0); // #9A7500
        let blue = Color::Rgb(59, 110, 168); // #3B6EA8
        let teal = Color::Rgb(41, 131, 141); // #29838D
        let cyan = Color::Rgb(57, 142, 172); // #398EAC
        let violet = Color::Rgb(132, 40, 121); // #842879

        Self {
            app_name: Style::default().fg(teal).add_modifier(Modifier::BOLD),
            border: Style::default().fg(base7),
            footer_help: Style::default().fg(base7),

            node_core: Style::default().fg(teal),
            node_leaf: Style::default().fg(green),
            node_selected: Style::default().fg(violet).add_modifier(Modifier::BOLD),
            link_normal: Style::default().fg(base7),
            link_highlight: Style::default().fg(yellow).add_modifier(Modifier::BOLD),
            isd_caption: Style::default().fg(blue),

            console_info: Style::default().fg(fg),
            console_error: Style::default().fg(red),
            console_stamp: Style::default().fg(base7),

            detail_label: Style::default().fg(fg),
            detail_value: Style::default().fg(fg_alt),
            path_heading: Style::default().fg(cyan).add_modifier(Modifier::BOLD),
            path_route: Style::default().fg(fg),

            stat_selection: Style::default().fg(violet),
            stat_url: Style::default().fg(base7),

            modal_title: Style::default().fg(teal).add_modifier(Modifier::BOLD),
            modal_border: Style::default().fg(cyan),
            modal_body: Style::default().fg(fg_alt),
        }
    }

    /// Return the node style for an AS role.
    pub(crate) fn node_style(&self, role: AsRole) -> Style {
        match role {
            AsRole::Core => self.node_core,
            AsRole::Leaf => self.node_leaf,
        }
    }
}

/// Complete visual presentation — colors + text.
///
/// Swap in a different `Theme` to localise or white-label the TUI.
pub(crate) struct Theme {
    pub(crate) scheme: ColorScheme,
    pub(crate) labels: Labels,
}

impl Theme {
    /// Build a theme for the given theme and language.
    pub(crate) fn new(theme_name: ThemeName, lang_name: LangName) -> Self {
        let scheme = match theme_name {
            ThemeName::Nord => ColorScheme::nord(),
            ThemeName::DoomNordLight => ColorScheme::doom_nord_light(),
        };
        let labels = match lang_name {
            LangName::En => Labels::en(),
            LangName::Zh => Labels::zh(),
        };
        Self { scheme, labels }
    }
}

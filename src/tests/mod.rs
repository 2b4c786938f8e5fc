/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! End-to-end tests of the panel protocol: key events in, console
//! lines and pane state out. Nothing here touches a live backend;
//! fetch outcomes are constructed directly.

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::actions::KeyResult;
use crate::actions::PanelAction;
use crate::app::App;
use crate::client::build_gateway;
use crate::fetch::FetchOutcome;
use crate::fetch::FetchPayload;
use crate::model::AsId;
use crate::model::ContainerStatus;
use crate::model::EduTopic;
use crate::model::HealthResponse;
use crate::model::LogsResponse;
use crate::model::PathEntry;
use crate::model::PathsResponse;
use crate::model::PingResponse;
use crate::model::Severity;
use crate::model::StatusResponse;
use crate::theme::LangName;
use crate::theme::Theme;
use crate::theme::ThemeName;

fn test_app() -> (App, UnboundedReceiver<FetchOutcome>) {
    // Nothing listens here; tests never let a fetch complete.
    let gateway = build_gateway("127.0.0.1:9");
    App::new(gateway, Theme::new(ThemeName::Nord, LangName::En))
}

fn texts(app: &App) -> Vec<String> {
    app.console.lines().map(|l| l.text.clone()).collect()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Deliver an Ok payload through the token path, as the event loop
/// would.
fn deliver(app: &mut App, action: PanelAction, payload: FetchPayload) {
    let token = app.tokens.issue(action);
    app.apply_outcome(FetchOutcome {
        action,
        token,
        result: Ok(payload),
    });
}

fn deliver_err(app: &mut App, action: PanelAction, message: &str) {
    let token = app.tokens.issue(action);
    app.apply_outcome(FetchOutcome {
        action,
        token,
        result: Err(message.to_string()),
    });
}

#[test]
fn selection_is_idempotent_and_single() {
    let (mut app, _rx) = test_app();
    for id in AsId::ALL {
        app.select_as(id);
        assert_eq!(app.selected, Some(id));
    }
    app.select_as(AsId::As110);
    app.select_as(AsId::As110);
    assert_eq!(app.selected, Some(AsId::As110));
}

#[test]
fn number_keys_select_in_diagram_order() {
    let (mut app, _rx) = test_app();
    for (c, id) in [('1', AsId::As110), ('2', AsId::As111), ('3', AsId::As210), ('4', AsId::As211)]
    {
        assert!(matches!(app.on_key(key(KeyCode::Char(c))), KeyResult::None));
        assert_eq!(app.selected, Some(id));
    }
}

#[test]
fn action_keys_dispatch_their_panel_action() {
    let (mut app, _rx) = test_app();
    for (c, action) in [
        ('s', PanelAction::Status),
        ('p', PanelAction::Paths),
        ('n', PanelAction::Ping),
        ('l', PanelAction::Logs),
    ] {
        match app.on_key(key(KeyCode::Char(c))) {
            KeyResult::Dispatch(got) => assert_eq!(got, action),
            KeyResult::None => panic!("key {:?} did not dispatch", c),
        }
    }
}

#[test]
fn q_quits() {
    let (mut app, _rx) = test_app();
    app.on_key(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[tokio::test]
async fn start_action_resets_console_and_logs_intent() {
    let (mut app, _rx) = test_app();
    app.console.info("leftover");
    app.start_action(PanelAction::Status);
    assert_eq!(texts(&app), vec!["Checking container status...".to_string()]);
}

#[test]
fn status_lines_keep_container_order_and_markers() {
    let (mut app, _rx) = test_app();
    deliver(
        &mut app,
        PanelAction::Status,
        FetchPayload::Status(StatusResponse {
            containers: vec![
                ContainerStatus {
                    name: "x".to_string(),
                    status: "Up 2 hours".to_string(),
                },
                ContainerStatus {
                    name: "y".to_string(),
                    status: "Exited".to_string(),
                },
            ],
        }),
    );
    assert_eq!(
        texts(&app),
        vec!["✅ x: Up 2 hours".to_string(), "❌ y: Exited".to_string()]
    );
}

#[test]
fn empty_paths_hide_pane_and_log_retry_hint() {
    let (mut app, _rx) = test_app();
    app.paths_visible = true;
    deliver(
        &mut app,
        PanelAction::Paths,
        FetchPayload::Paths(PathsResponse { paths: vec![] }),
    );
    assert!(!app.paths_visible);
    let lines = texts(&app);
    assert_eq!(
        lines,
        vec![
            "No paths found. Network may still be converging.".to_string(),
            "Wait 30-60 seconds and try again.".to_string(),
        ]
    );
    let first = app.console.lines().next().unwrap();
    assert_eq!(first.severity, Severity::Error);
}

#[test]
fn discovered_paths_show_pane_and_light_highlight() {
    let (mut app, _rx) = test_app();
    deliver(
        &mut app,
        PanelAction::Paths,
        FetchPayload::Paths(PathsResponse {
            paths: vec![PathEntry {
                hops: 3,
                route: "A→B→C".to_string(),
            }],
        }),
    );
    assert!(app.paths_visible);
    assert_eq!(app.paths.len(), 1);
    assert_eq!(app.paths[0].route, "A→B→C");
    assert_eq!(texts(&app), vec!["Found 1 path(s)".to_string()]);
    assert!(app.link_highlight_active());
}

#[test]
fn paths_error_keeps_prior_entries() {
    let (mut app, _rx) = test_app();
    deliver(
        &mut app,
        PanelAction::Paths,
        FetchPayload::Paths(PathsResponse {
            paths: vec![PathEntry {
                hops: 2,
                route: "A→B".to_string(),
            }],
        }),
    );
    deliver_err(&mut app, PanelAction::Paths, "backend exploded");
    // Entries stay; only the console reports the failure.
    assert_eq!(app.paths.len(), 1);
    let lines = texts(&app);
    assert!(lines.contains(&"Error: backend exploded".to_string()));
}

#[test]
fn ping_output_skips_blank_lines_and_summarizes() {
    let (mut app, _rx) = test_app();
    deliver(
        &mut app,
        PanelAction::Ping,
        FetchPayload::Ping(PingResponse {
            output: "first\n\n   \nsecond\n".to_string(),
            success: true,
        }),
    );
    assert_eq!(
        texts(&app),
        vec![
            "first".to_string(),
            "second".to_string(),
            "✅ Ping successful!".to_string(),
        ]
    );
}

#[test]
fn failed_ping_gets_error_summary() {
    let (mut app, _rx) = test_app();
    deliver(
        &mut app,
        PanelAction::Ping,
        FetchPayload::Ping(PingResponse {
            output: String::new(),
            success: false,
        }),
    );
    let last = app.console.lines().last().unwrap();
    assert_eq!(last.text, "❌ Ping failed. Check network status.");
    assert_eq!(last.severity, Severity::Error);
}

#[test]
fn log_lines_are_relayed_verbatim_in_order() {
    let (mut app, _rx) = test_app();
    deliver(
        &mut app,
        PanelAction::Logs,
        FetchPayload::Logs(LogsResponse {
            logs: vec!["alpha".to_string(), "beta".to_string()],
        }),
    );
    assert_eq!(texts(&app), vec!["alpha".to_string(), "beta".to_string()]);
}

#[test]
fn stale_outcome_is_discarded() {
    let (mut app, _rx) = test_app();
    let stale = app.tokens.issue(PanelAction::Logs);
    let _fresh = app.tokens.issue(PanelAction::Logs);
    app.apply_outcome(FetchOutcome {
        action: PanelAction::Logs,
        token: stale,
        result: Ok(FetchPayload::Logs(LogsResponse {
            logs: vec!["late".to_string()],
        })),
    });
    assert!(app.console.is_empty());
}

#[test]
fn highlight_expires_once_its_deadline_passes() {
    let (mut app, _rx) = test_app();
    app.highlight_until = Some(std::time::Instant::now());
    app.expire_highlight();
    assert!(app.highlight_until.is_none());
    assert!(!app.link_highlight_active());
}

#[test]
fn status_error_carries_backend_hint() {
    let (mut app, _rx) = test_app();
    deliver_err(&mut app, PanelAction::Status, "connection refused");
    let lines = texts(&app);
    assert_eq!(lines[0], "Error: connection refused");
    assert!(lines[1].contains(&app.gateway.base_url));
}

#[test]
fn paths_error_has_no_backend_hint() {
    let (mut app, _rx) = test_app();
    deliver_err(&mut app, PanelAction::Paths, "connection refused");
    assert_eq!(texts(&app), vec!["Error: connection refused".to_string()]);
}

#[test]
fn healthy_backend_logs_connected() {
    let (mut app, _rx) = test_app();
    deliver(
        &mut app,
        PanelAction::Health,
        FetchPayload::Health(HealthResponse {
            status: "ok".to_string(),
        }),
    );
    assert_eq!(texts(&app), vec!["✅ Server connected.".to_string()]);
}

#[test]
fn unreachable_backend_logs_warning_pair() {
    let (mut app, _rx) = test_app();
    deliver_err(&mut app, PanelAction::Health, "connect timed out");
    let lines = texts(&app);
    assert_eq!(lines[0], "⚠️ Backend server not running.");
    assert!(lines[1].contains(&app.gateway.base_url));
}

#[test]
fn help_keys_open_their_topic() {
    let (mut app, _rx) = test_app();
    for (c, topic) in [
        ('i', EduTopic::Isd),
        ('a', EduTopic::As),
        ('t', EduTopic::Path),
        ('b', EduTopic::Beacon),
    ] {
        app.on_key(key(KeyCode::Char(c)));
        assert_eq!(app.modal, Some(topic));
        app.close_modal();
    }
}

#[test]
fn escape_closes_the_modal() {
    let (mut app, _rx) = test_app();
    app.open_help(EduTopic::Isd);
    app.on_key(key(KeyCode::Esc));
    assert!(app.modal.is_none());
}

#[test]
fn open_modal_swallows_action_keys() {
    let (mut app, _rx) = test_app();
    app.open_help(EduTopic::Beacon);
    assert!(matches!(
        app.on_key(key(KeyCode::Char('s'))),
        KeyResult::None
    ));
    assert!(app.modal.is_some());
    assert!(app.console.is_empty());
}

#[test]
fn backdrop_click_closes_modal_but_content_click_does_not() {
    let area = Rect::new(0, 0, 80, 24);
    let (mut app, _rx) = test_app();
    app.open_help(EduTopic::Isd);

    // Center of the screen is inside the modal content.
    app.on_mouse(
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 40,
            row: 12,
            modifiers: KeyModifiers::NONE,
        },
        area,
    );
    assert!(app.modal.is_some());

    // The top-left corner is backdrop.
    app.on_mouse(
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        },
        area,
    );
    assert!(app.modal.is_none());
}

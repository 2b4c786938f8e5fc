/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Application state and the event loop.
//!
//! Every network-backed action follows the same protocol: clear the
//! console, log an intent line, issue a token, spawn the fetch, and
//! apply the outcome when it arrives — unless a newer token has been
//! issued for the same action in the meantime, in which case the
//! outcome is dropped on the floor. Selection and the educational
//! modal are local state transitions with no network round trip.

use std::io;
use std::time::Duration;
use std::time::Instant;

use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;

use crate::actions::KeyResult;
use crate::actions::PanelAction;
use crate::client::Gateway;
use crate::console::Console;
use crate::fetch::FetchOutcome;
use crate::fetch::FetchPayload;
use crate::fetch::Tokens;
use crate::fetch::spawn_fetch;
use crate::format;
use crate::model::AsId;
use crate::model::EduTopic;
use crate::model::PathEntry;
use crate::registry;
use crate::render;
use crate::render::modal::modal_area;
use crate::theme::Theme;

/// How long the demo-path link highlight stays lit after a
/// successful path discovery.
pub(crate) const HIGHLIGHT_TTL: Duration = Duration::from_secs(3);

/// Event-loop tick, used only to expire the link highlight.
const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// All mutable interface state, owned by the event loop.
///
/// Nothing here is shared: fetch tasks communicate exclusively
/// through the outcome channel, so every field is written from the
/// single loop task.
pub(crate) struct App {
    pub(crate) gateway: Gateway,
    pub(crate) theme: Theme,
    pub(crate) console: Console,
    /// Currently selected AS, if any. Set by selection, never
    /// cleared.
    pub(crate) selected: Option<AsId>,
    /// Last successfully discovered paths. Kept across later
    /// failures; the pane visibility is tracked separately.
    pub(crate) paths: Vec<PathEntry>,
    pub(crate) paths_visible: bool,
    /// Deadline of the transient demo-path highlight, when lit.
    pub(crate) highlight_until: Option<Instant>,
    /// Open educational modal topic, if any. While open, it captures
    /// all input except quit.
    pub(crate) modal: Option<EduTopic>,
    pub(crate) tokens: Tokens,
    outcome_tx: UnboundedSender<FetchOutcome>,
    pub(crate) should_quit: bool,
}

impl App {
    /// Create the app plus the receiving half of the fetch outcome
    /// channel, which the event loop selects on.
    pub(crate) fn new(gateway: Gateway, theme: Theme) -> (Self, UnboundedReceiver<FetchOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let app = Self {
            gateway,
            theme,
            console: Console::new(),
            selected: None,
            paths: Vec::new(),
            paths_visible: false,
            highlight_until: None,
            modal: None,
            tokens: Tokens::new(),
            outcome_tx,
            should_quit: false,
        };
        (app, outcome_rx)
    }

    /// Intent line logged when an action starts. The startup health
    /// probe is silent.
    fn intent(action: PanelAction) -> Option<&'static str> {
        match action {
            PanelAction::Health => None,
            PanelAction::Status => Some("Checking container status..."),
            PanelAction::Paths => Some("Discovering paths from AS111 to AS211..."),
            PanelAction::Ping => Some("Running SCION ping from AS111 to AS110..."),
            PanelAction::Logs => Some("Fetching recent logs..."),
        }
    }

    /// Start the shared panel protocol for a network-backed action:
    /// console reset, intent line, then a token-stamped fetch.
    pub(crate) fn start_action(&mut self, action: PanelAction) {
        if let Some(intent) = Self::intent(action) {
            self.console.clear();
            self.console.info(intent);
        }
        self.dispatch(action);
    }

    /// Issue a fresh token and spawn the fetch task. Outstanding
    /// requests for the same action are not cancelled; their
    /// outcomes just become stale.
    pub(crate) fn dispatch(&mut self, action: PanelAction) {
        let token = self.tokens.issue(action);
        tracing::info!(?action, token, "dispatching fetch");
        spawn_fetch(self.gateway.clone(), action, token, self.outcome_tx.clone());
    }

    /// One-line pointer at the backend, appended under error lines
    /// for actions where a dead backend is the most likely cause.
    fn backend_hint(&self) -> String {
        format!("Make sure the backend is running at {}", self.gateway.base_url)
    }

    /// Apply a completed fetch, unless it has been superseded.
    pub(crate) fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if !self.tokens.is_current(outcome.action, outcome.token) {
            tracing::debug!(
                action = ?outcome.action,
                token = outcome.token,
                "discarding stale fetch outcome"
            );
            return;
        }
        match outcome.result {
            Ok(payload) => self.apply_payload(payload),
            Err(message) => self.apply_error(outcome.action, message),
        }
    }

    fn apply_error(&mut self, action: PanelAction, message: String) {
        tracing::warn!(?action, %message, "fetch failed");
        match action {
            PanelAction::Health => {
                self.console.error("⚠️ Backend server not running.");
                let hint = self.backend_hint();
                self.console.error(hint);
            }
            PanelAction::Status | PanelAction::Ping | PanelAction::Logs => {
                self.console.error(format!("Error: {}", message));
                let hint = self.backend_hint();
                self.console.error(hint);
            }
            PanelAction::Paths => {
                self.console.error(format!("Error: {}", message));
            }
        }
    }

    fn apply_payload(&mut self, payload: FetchPayload) {
        match payload {
            FetchPayload::Health(health) => {
                if health.status == "ok" {
                    self.console.info("✅ Server connected.");
                }
            }
            FetchPayload::Status(status) => {
                if status.containers.is_empty() {
                    self.console.error("No container data returned.");
                } else {
                    for container in &status.containers {
                        let line = format::status_line(&container.name, &container.status);
                        self.console.info(line);
                    }
                }
            }
            FetchPayload::Paths(paths) => {
                if paths.paths.is_empty() {
                    self.paths_visible = false;
                    self.console
                        .error("No paths found. Network may still be converging.");
                    self.console.info("Wait 30-60 seconds and try again.");
                } else {
                    self.paths = paths.paths;
                    self.paths_visible = true;
                    self.console
                        .info(format!("Found {} path(s)", self.paths.len()));
                    self.highlight_until = Some(Instant::now() + HIGHLIGHT_TTL);
                }
            }
            FetchPayload::Ping(ping) => {
                for line in ping.output.lines() {
                    if !line.trim().is_empty() {
                        self.console.info(line);
                    }
                }
                if ping.success {
                    self.console.info("✅ Ping successful!");
                } else {
                    self.console.error("❌ Ping failed. Check network status.");
                }
            }
            FetchPayload::Logs(logs) => {
                if logs.logs.is_empty() {
                    self.console.error("No log data returned.");
                } else {
                    for line in logs.logs {
                        self.console.info(line);
                    }
                }
            }
        }
    }

    /// Select an AS node. Repeated selection of the same node is a
    /// no-op; there is never more than one selected node.
    pub(crate) fn select_as(&mut self, id: AsId) {
        self.selected = Some(id);
    }

    /// Open the educational modal for a topic. An unknown topic is a
    /// silent no-op.
    pub(crate) fn open_help(&mut self, topic: EduTopic) {
        if registry::edu_entry(topic).is_some() {
            self.modal = Some(topic);
        }
    }

    pub(crate) fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Whether the demo-path highlight is currently lit.
    pub(crate) fn link_highlight_active(&self) -> bool {
        self.highlight_until
            .is_some_and(|until| Instant::now() < until)
    }

    /// Drop the highlight deadline once it has passed.
    pub(crate) fn expire_highlight(&mut self) {
        if let Some(until) = self.highlight_until {
            if Instant::now() >= until {
                self.highlight_until = None;
            }
        }
    }

    /// Handle a key event. While the modal is open it captures all
    /// input: close keys and quit work, everything else is ignored.
    pub(crate) fn on_key(&mut self, key: KeyEvent) -> KeyResult {
        if key.kind != KeyEventKind::Press {
            return KeyResult::None;
        }
        let ctrl_c = key.code == KeyCode::Char('c')
            && key.modifiers.contains(KeyModifiers::CONTROL);
        if self.modal.is_some() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.close_modal(),
                KeyCode::Char('q') => self.should_quit = true,
                _ if ctrl_c => self.should_quit = true,
                _ => {}
            }
            return KeyResult::None;
        }
        if ctrl_c {
            self.should_quit = true;
            return KeyResult::None;
        }
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                KeyResult::None
            }
            KeyCode::Char('s') => KeyResult::Dispatch(PanelAction::Status),
            KeyCode::Char('p') => KeyResult::Dispatch(PanelAction::Paths),
            KeyCode::Char('n') => KeyResult::Dispatch(PanelAction::Ping),
            KeyCode::Char('l') => KeyResult::Dispatch(PanelAction::Logs),
            KeyCode::Char('1') => {
                self.select_as(AsId::As110);
                KeyResult::None
            }
            KeyCode::Char('2') => {
                self.select_as(AsId::As111);
                KeyResult::None
            }
            KeyCode::Char('3') => {
                self.select_as(AsId::As210);
                KeyResult::None
            }
            KeyCode::Char('4') => {
                self.select_as(AsId::As211);
                KeyResult::None
            }
            KeyCode::Char('i') => {
                self.open_help(EduTopic::Isd);
                KeyResult::None
            }
            KeyCode::Char('a') => {
                self.open_help(EduTopic::As);
                KeyResult::None
            }
            KeyCode::Char('t') => {
                self.open_help(EduTopic::Path);
                KeyResult::None
            }
            KeyCode::Char('b') => {
                self.open_help(EduTopic::Beacon);
                KeyResult::None
            }
            _ => KeyResult::None,
        }
    }

    /// Handle a mouse event. The only mouse interaction is the modal
    /// backdrop: a press outside the modal content closes it, a
    /// press inside does not.
    pub(crate) fn on_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if self.modal.is_none() {
            return;
        }
        if let MouseEventKind::Down(_) = mouse.kind {
            let click = Position::new(mouse.column, mouse.row);
            if !modal_area(area).contains(click) {
                self.close_modal();
            }
        }
    }
}

/// Drive the TUI until the user quits.
pub(crate) async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut outcomes: UnboundedReceiver<FetchOutcome>,
) -> io::Result<()> {
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(TICK_INTERVAL);
    loop {
        terminal.draw(|frame| render::ui(frame, &app))?;
        tokio::select! {
            _ = tick.tick() => {
                app.expire_highlight();
            }
            Some(outcome) = outcomes.recv() => {
                app.apply_outcome(outcome);
            }
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => match app.on_key(key) {
                        KeyResult::None => {}
                        KeyResult::Dispatch(action) => app.start_action(action),
                    },
                    Some(Ok(Event::Mouse(mouse))) => {
                        let size = terminal.size()?;
                        app.on_mouse(mouse, Rect::new(0, 0, size.width, size.height));
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e),
                    None => break,
                }
            }
        }
        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Terminal dashboard for the SCION demo network backend.
//!
//! Renders the fixed four-node topology, forwards status / path /
//! ping / log queries to the backend over HTTP, and shows results in
//! a scrolling console. See the module docs of [`app`] and [`fetch`]
//! for the event-loop and request-sequencing model.

mod actions;
mod app;
mod client;
mod console;
mod fetch;
mod format;
mod model;
mod registry;
mod render;
mod theme;

#[cfg(test)]
mod tests;

use std::io;
use std::io::IsTerminal;
use std::time::Duration;

use clap::Parser;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::actions::PanelAction;
use crate::app::App;
use crate::app::run_app;
use crate::client::build_gateway;
use crate::fetch::FetchOutcome;
use crate::fetch::fetch_payload;
use crate::theme::Args;
use crate::theme::Theme;

/// Route tracing output to a file when requested; stdout belongs to
/// the TUI.
fn init_tracing(args: &Args) -> io::Result<()> {
    if let Some(path) = &args.log_file {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    if !io::stdout().is_terminal() {
        eprintln!("stdout is not a terminal");
        std::process::exit(1);
    }

    let gateway = build_gateway(&args.addr);
    let theme = Theme::new(args.theme, args.lang);
    let (mut app, outcomes) = App::new(gateway.clone(), theme);

    app.console.info("SCION Visualizer ready.");
    app.console
        .info("Press 1-4 to select an AS or use the action keys to explore.");

    // One fire-and-forget health probe before entering the alternate
    // screen, behind a spinner. Its outcome lands in the console like
    // any other fetch.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Connecting to {} ...", gateway.base_url));

    let token = app.tokens.issue(PanelAction::Health);
    let result = fetch_payload(&gateway, PanelAction::Health).await;
    app.apply_outcome(FetchOutcome {
        action: PanelAction::Health,
        token,
        result,
    });
    spinner.finish_and_clear();

    let mut terminal = setup_terminal()?;
    let run_result = run_app(&mut terminal, app, outcomes).await;
    restore_terminal(&mut terminal)?;
    run_result
}

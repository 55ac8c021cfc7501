mod app;
mod args;
mod config;
mod dom;
mod form;
mod greeter;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::{AppEvent, SubmissionId};
use crate::app::handler;
use crate::app::state::AppState;
use crate::greeter::GreetingService;
use anyhow::Result;
use args::Args;
use clap::Parser;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load config, writing the defaults on first run
    let cfg = match &args.config {
        Some(path) => config::load_config_from(path)?,
        None => {
            if let Err(e) = config::ensure_config_file() {
                eprintln!("Warning: could not write default config: {:#}", e);
            }
            config::load_config()?
        }
    };

    if let Err(e) = logging::init(&cfg.logging) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    tracing::info!(kind = ?cfg.service.kind, "greeting service selected");
    let service = greeter::from_config(&cfg.service);

    if let Some(name) = args.name {
        let greeting = app::once::submit_once(&cfg.ui.title, &name, service.as_ref()).await?;
        println!("{}", greeting);
        return Ok(());
    }

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, service).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "application error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    service: Arc<dyn GreetingService>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let tick_rate = std::time::Duration::from_millis(cfg.ui.tick_rate_ms.max(1));
    let mut state = AppState::new(cfg)?;

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::InvokeGreet { submission, name } => {
                    spawn_greet(service.clone(), event_tx.clone(), submission, name);
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

/// Runs one service call off the event loop and posts its outcome back.
/// The call is never cancelled; quitting simply drops the reply.
fn spawn_greet(
    service: Arc<dyn GreetingService>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    submission: SubmissionId,
    name: String,
) {
    tokio::spawn(async move {
        let event = handler::call_service(service.as_ref(), submission, &name).await;
        let _ = event_tx.send(event);
    });
}

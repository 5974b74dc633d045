use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{error, info};

use terminal::app::{App, AppCommand};
use terminal::config::Args;
use terminal::driver::TickDriver;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Args::parse().into_settings()?;

    init_logging(&settings.log_file)?;
    info!(
        "Starting {}x{} game, start cell {}, tick every {:?}",
        settings.game.num_rows,
        settings.game.num_cols,
        settings.game.start_index,
        settings.tick_interval()
    );

    let mut app = App::new(&settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, settings.tick_interval()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
    terminal.show_cursor()?;

    match res {
        Ok(()) => {
            info!("Exited with snake length {}", app.session().snake_len());
            Ok(())
        }
        Err(err) => {
            error!("Game stopped: {:?}", err);
            Err(err)
        }
    }
}

fn init_logging(log_file: &Path) -> Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("Failed to create log file: {:?}", log_file))?;
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Single consumer loop: ticks and terminal events are handled one at a time,
/// each running to completion before the next is taken.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    period: Duration,
) -> Result<()> {
    let (driver, mut ticks) = TickDriver::start(period);
    let mut events = EventStream::new();
    app.start()?;

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            tick = ticks.recv() => match tick {
                Some(_) => app.on_tick()?,
                None => break,
            },

            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => {
                    if let Some(command) = app.handle_event(&event) {
                        match command {
                            AppCommand::Quit => break,
                            _ => app.handle_command(command)?,
                        }
                    }
                }
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => break,
            },
        }
    }

    driver.shutdown().await;
    Ok(())
}

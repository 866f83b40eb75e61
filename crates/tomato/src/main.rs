//! tomato - a pomodoro timer for the terminal
//!
//! Work 25 minutes, break 5, and after four work intervals take a 20
//! minute long break. A checkmark appears for each completed work
//! interval; reset wipes the slate.

mod app;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::time::Instant;
use tomato_core::TICK_PERIOD;
use tracing_subscriber::EnvFilter;

use app::App;

#[derive(Parser)]
#[command(name = "tomato")]
#[command(about = "Pomodoro countdown timer for the terminal")]
#[command(version)]
#[command(after_help = r#"KEY BINDINGS:
    s, Enter    Start the next interval
    r           Reset the timer
    q, Esc      Quit

THE CYCLE:
    work 25:00, break 5:00, repeated; every fourth break is 20:00.
    One checkmark per completed work interval.

The timer takes no arguments: interval lengths are fixed and there is
nothing to configure. Set RUST_LOG (e.g. RUST_LOG=debug) to log state
transitions to stderr."#)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Sleep until the next scheduled tick; key events interrupt the
        // poll, so input stays responsive at any timeout.
        let timeout = app
            .scheduler
            .until_next_tick(Instant::now())
            .unwrap_or(TICK_PERIOD);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('s') | KeyCode::Enter => app.start(Instant::now()),
                        KeyCode::Char('r') => app.reset(),
                        _ => {}
                    }
                }
            }
        }

        app.on_tick(Instant::now());
    }
}

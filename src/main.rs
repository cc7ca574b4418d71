//! Folio TUI - a personal site for the terminal
//!
//! A Ratatui rendition of a one-page portfolio: a Home view with ambient
//! animations and a Contact view wired to a form endpoint.

mod app;
mod backend;
mod config;
mod platform;
mod state;
mod ui;
mod validate;

use anyhow::Result;
use app::App;
use config::FolioConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never land in the alternate screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting folio-tui");

    let config = match FolioConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "failed to load config, using defaults");
            FolioConfig::default()
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config)?;
    let result = run_app(&mut terminal, &mut app).await;

    // Restore the terminal before reporting anything
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Advance the animation clock and consume last frame's visibility
        app.on_frame(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        // The flicker needs ~60fps while Home animates; idle at 100ms otherwise
        let poll_duration = if app.is_animating() {
            std::time::Duration::from_millis(16)
        } else {
            std::time::Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(_, _) => {
                    // Content reflows on the next draw; scroll offsets
                    // clamp against the new height then
                }
                _ => {}
            }
        }

        // Apply submissions resolved since the last tick
        app.drain_events();

        if app.should_quit() {
            return Ok(());
        }
    }
}

//! Terminal UI for timeline.

mod app;
mod input;
mod layout;
mod ui;

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

use crate::config::UiConfig;
use app::{App, Flow};

/// Runs the game until the user quits.
///
/// The terminal is restored before any error from setup or the event loop
/// is returned.
#[instrument(skip_all, fields(mouse = *config.mouse()))]
pub fn run(config: &UiConfig) -> Result<()> {
    let mouse = *config.mouse();
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let setup = enable_raw_mode().and_then(|()| enter_screen(terminal.backend_mut(), mouse));
    if let Err(err) = setup {
        error!(error = ?err, "Terminal setup failed");
        if let Err(restore_err) = restore_terminal(&mut terminal, mouse) {
            warn!(error = ?restore_err, "Terminal restore failed");
        }
        return Err(err.into());
    }

    let res = run_game(&mut terminal, App::new());

    restore_terminal(&mut terminal, mouse)?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Leaves raw mode and the alternate screen, and shows the cursor again.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mouse: bool,
) -> io::Result<()> {
    disable_raw_mode()?;
    leave_screen(terminal.backend_mut(), mouse)?;
    terminal.show_cursor()
}

fn enter_screen<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    if mouse {
        execute!(out, EnterAlternateScreen, EnableMouseCapture)
    } else {
        execute!(out, EnterAlternateScreen)
    }
}

fn leave_screen<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    if mouse {
        execute!(out, LeaveAlternateScreen, DisableMouseCapture)
    } else {
        execute!(out, LeaveAlternateScreen)
    }
}

/// Draw, wait for one input event, handle it, repeat.
fn run_game(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    info!("Starting game loop");

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            if app.handle_event(&event) == Flow::Quit {
                info!(
                    moves = app.game().history().len() - 1,
                    "User quit"
                );
                return Ok(());
            }
        }
    }
}

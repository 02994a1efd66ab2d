//! Terminal lifecycle.
//!
//! [`Tui`] enters raw mode and the alternate screen when created and leaves
//! both when dropped, so the shell is restored on normal exit, on `?`
//! propagation out of `main`, and during a panic unwind. The panic hook
//! covers panics that abort before destructors run.
use std::io::{Stdout, stdout};
use std::panic::{set_hook, take_hook};

use anyhow::{Context, Result};
use crossterm::ExecutableCommand;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::error;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Terminal type drawn to by the application.
pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the UI is running.
pub struct Tui
{
    /// Terminal in raw mode on the alternate screen
    terminal: CrosstermTerminal,
}

impl Tui
{
    /// Switches the terminal into raw mode on the alternate screen.
    ///
    /// # Errors
    ///
    /// On failure to enter raw mode, switch screens or create the backend.
    /// Any half-applied setup is undone before returning.
    pub fn new() -> Result<Self>
    {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let setup = stdout()
            .execute(EnterAlternateScreen)
            .map_err(anyhow::Error::from)
            .and_then(|_| {
                Terminal::new(CrosstermBackend::new(stdout()))
                    .context("Failed to create terminal")
            });

        match setup
        {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) =>
            {
                restore_terminal();
                Err(err.context("Failed to enter alternate screen"))
            }
        }
    }

    /// The terminal to draw to.
    pub const fn terminal_mut(&mut self) -> &mut CrosstermTerminal
    {
        &mut self.terminal
    }
}

impl Drop for Tui
{
    fn drop(&mut self)
    {
        restore_terminal();
    }
}

/// Leaves the alternate screen and raw mode, logging instead of failing.
fn restore_terminal()
{
    if let Err(err) = disable_raw_mode()
    {
        error!("Failed to disable raw mode: {err}");
    }

    if let Err(err) = stdout().execute(LeaveAlternateScreen)
    {
        error!("Failed to leave alternate screen: {err}");
    }
}

/// Installs a panic hook that restores the terminal before the default
/// hook prints the panic message.
pub fn init_panic_hook()
{
    let original_hook = take_hook();
    set_hook(Box::new(move |panic_info| {
        restore_terminal();

        error!("Application panicked: {panic_info}");

        original_hook(panic_info);
    }));
}

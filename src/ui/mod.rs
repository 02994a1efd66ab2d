//! User Interface module for the forum browser.
//!
//! Contains the application state, the screens and the terminal plumbing
//! (event thread, terminal guard, logging).
mod app;
mod event;
mod forum_view;
mod guard;
pub mod logging;
mod screens;

pub use app::{App, AppMode, ComposeField, Draft, Screen, View};
pub use event::{Event, EventHandler};
pub use guard::{CrosstermTerminal, Tui, init_panic_hook};

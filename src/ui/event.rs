//! Terminal input delivered over a channel.
//!
//! A background thread polls crossterm and forwards key presses and resizes
//! to the main thread, interleaved with periodic ticks. Ticks make the main
//! loop redraw so relative timestamps stay current while the user is idle.
//! All application state stays on the main thread.
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use log::error;

/// Events that can be processed by the application
#[derive(Debug, Clone, Copy)]
pub enum Event
{
    /// Regular time tick
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Terminal resize event with new dimensions
    Resize(u16, u16),
}

/// Owns the input thread and the receiving end of its channel.
pub struct EventHandler
{
    /// Events produced by the input thread
    event_receiver: mpsc::Receiver<Event>,
    /// Dropping or sending on this stops the input thread
    shutdown_sender: mpsc::Sender<()>,
    /// Taken in `drop` to join the thread
    thread_handle: Option<JoinHandle<()>>,
}

impl EventHandler
{
    /// Starts the input thread.
    ///
    /// # Arguments
    ///
    /// * `tick_rate` - The duration between tick events
    #[must_use]
    pub fn new(tick_rate: Duration) -> Self
    {
        let (event_sender, event_receiver) = mpsc::channel();
        let (shutdown_sender, shutdown_receiver) = mpsc::channel();

        let handle = thread::spawn(move || {
            let mut last_tick = Instant::now();

            while shutdown_receiver.try_recv().is_err()
            {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                match poll_once(timeout)
                {
                    Ok(Some(event)) =>
                    {
                        // Receiver dropped, nobody is listening anymore
                        if event_sender.send(event).is_err()
                        {
                            break;
                        }
                    }
                    Ok(None) =>
                    {}
                    Err(err) =>
                    {
                        // Dropping the sender surfaces this as a
                        // disconnected channel in `next`
                        error!("Stopping input thread: {err:#}");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate
                {
                    if event_sender.send(Event::Tick).is_err()
                    {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            event_receiver,
            shutdown_sender,
            thread_handle: Some(handle),
        }
    }

    /// Blocks until the next event arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the input thread has stopped.
    pub fn next(&self) -> Result<Event>
    {
        self.event_receiver
            .recv()
            .context("Event channel disconnected")
    }
}

/// Waits up to `timeout` for one terminal event worth forwarding.
///
/// Key releases and repeats are dropped so each key press is seen once on
/// every platform.
fn poll_once(timeout: Duration) -> Result<Option<Event>>
{
    if !event::poll(timeout).context("Error polling events")?
    {
        return Ok(None);
    }

    let event = match event::read().context("Error reading event")?
    {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    };

    Ok(event)
}

impl Drop for EventHandler
{
    fn drop(&mut self)
    {
        // The thread may already be gone
        let _ = self.shutdown_sender.send(());

        if let Some(handle) = self.thread_handle.take()
        {
            let _ = handle.join();
        }
    }
}

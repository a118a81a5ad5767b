//! Keyboard polling on top of crossterm's event queue.
//!
//! Only key presses are surfaced. Release and repeat events (emitted by
//! terminals with keyboard enhancement) and non-key events are skipped, so one
//! physical tap yields exactly one press.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

#[derive(Debug, Default)]
pub struct Keyboard;

impl Keyboard {
    pub fn new() -> Self {
        Self
    }

    /// Return a pending key press without blocking.
    pub fn poll(&mut self) -> io::Result<Option<KeyEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Some(key) = press(event::read()?) {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    /// Block until a key is pressed.
    pub fn wait(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Some(key) = press(event::read()?) {
                return Ok(key);
            }
        }
    }

    /// Block until a key is pressed or `timeout` elapses.
    pub fn wait_timeout(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(None);
            }
            if let Some(key) = press(event::read()?) {
                return Ok(Some(key));
            }
        }
    }

    /// Discard everything already queued.
    ///
    /// Returns how many events were dropped.
    pub fn flush(&mut self) -> io::Result<usize> {
        let mut dropped = 0;
        while event::poll(Duration::ZERO)? {
            let _ = event::read()?;
            dropped += 1;
        }
        Ok(dropped)
    }
}

fn press(ev: Event) -> Option<KeyEvent> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}

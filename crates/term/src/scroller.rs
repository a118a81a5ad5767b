//! Scrolling message line.
//!
//! The message is repeated three times with three-space gaps and shown as a
//! window that slides one character per scroll step, wrapping around.

use std::process::Command;

use crate::fb::FrameBuffer;
use crate::palette;

/// Upper bound on message length, in characters.
pub const MESSAGE_CAP: usize = 512;

/// Shown when `fortune` is unavailable.
pub const DEFAULT_MESSAGE: &str =
    "BOMBER GAME - DESTROY THE CITY! FLY CAREFULLY! AVOID THE BUILDINGS! ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLine {
    looped: Vec<char>,
}

impl MessageLine {
    pub fn new(message: &str) -> Self {
        let message: String = message
            .chars()
            .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
            .take(MESSAGE_CAP)
            .collect();
        let message = if message.trim().is_empty() {
            DEFAULT_MESSAGE.to_string()
        } else {
            message
        };
        let looped = format!("{message}   {message}   {message}").chars().collect();
        Self { looped }
    }

    /// Ask the `fortune` program for a message, falling back to the default.
    pub fn from_fortune() -> Self {
        match fortune() {
            Some(text) => Self::new(&text),
            None => {
                log::info!("fortune unavailable, using default message");
                Self::new(DEFAULT_MESSAGE)
            }
        }
    }

    /// Visible window of `width` characters at scroll offset `scroll`.
    pub fn window(&self, scroll: u64, width: usize) -> String {
        let len = self.looped.len() as u64;
        (0..width as u64)
            .map(|i| self.looped[((scroll + i) % len) as usize])
            .collect()
    }

    /// Paint the window onto row `y`.
    pub fn render(&self, fb: &mut FrameBuffer, y: u16, scroll: u64) {
        let text = self.window(scroll, fb.width() as usize);
        fb.put_str(0, y, &text, palette::MESSAGE);
    }
}

impl Default for MessageLine {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}

fn fortune() -> Option<String> {
    let output = Command::new("fortune")
        .args(["-s", "-n", "300"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).into_owned();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

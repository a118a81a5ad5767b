//! Seams between the round loop and the outside world.

use std::time::Duration;

use anyhow::Result;

use crate::core::{Session, World};
use crate::round::RoundResult;
use crate::types::InputEvent;

/// Pacing and keyboard access.
///
/// `poll_input` must never block; the `wait_*` methods block until a key (or
/// the timeout).
pub trait FrameScheduler {
    fn sleep(&mut self, duration: Duration);
    fn poll_input(&mut self) -> Result<Option<InputEvent>>;
    fn wait_key(&mut self) -> Result<InputEvent>;
    fn wait_key_timeout(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;
    /// Drop any keys typed ahead.
    fn flush_input(&mut self) -> Result<()>;
}

/// Full-screen overlays that suspend the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Pause,
    Help,
}

/// Everything the round loop draws. `scroll` is the message line offset.
pub trait Display {
    fn frame(&mut self, session: &Session, scroll: u64) -> Result<()>;
    /// Current frame plus the "too low to bomb" warning.
    fn low_altitude_warning(&mut self, session: &Session, scroll: u64) -> Result<()>;
    fn overlay(&mut self, overlay: Overlay, session: &Session, scroll: u64) -> Result<()>;
    fn quit_prompt(&mut self, session: &Session, scroll: u64) -> Result<()>;
    fn end_screen(&mut self, result: &RoundResult, scroll: u64) -> Result<()>;
    /// Skyline with only the first `blocks` blocks raised.
    fn city_intro(&mut self, world: &World, blocks: u32) -> Result<()>;
}

/// Receives the final score of every round.
pub trait ScoreSink {
    fn submit(&mut self, name: &str, score: u32) -> Result<()>;
}

impl ScoreSink for tui_bomber_scores::ScoreStore {
    fn submit(&mut self, name: &str, score: u32) -> Result<()> {
        tui_bomber_scores::ScoreStore::submit(self, name, score).map(|_| ())
    }
}

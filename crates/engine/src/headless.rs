//! In-memory scheduler, display and score sink.
//!
//! Used to drive rounds without a terminal or a clock: tests script the keys
//! and inspect what was drawn, benchmarks run whole rounds flat out.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;

use crate::core::{Session, World};
use crate::ports::{Display, FrameScheduler, Overlay, ScoreSink};
use crate::round::RoundResult;
use crate::types::InputEvent;

/// Replays a fixed list of keys, one entry per poll.
///
/// `None` entries are polls that find no key. Sleeps only add to `slept`.
/// Flushing does not consume the script: entries model keys that arrive
/// later, not keys already queued.
#[derive(Debug, Default)]
pub struct ScriptedScheduler {
    script: VecDeque<Option<InputEvent>>,
    pub slept: Duration,
    pub flushes: usize,
    /// Number of blocking `wait_key` calls.
    pub waits: usize,
}

impl ScriptedScheduler {
    pub fn new(script: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl FrameScheduler for ScriptedScheduler {
    fn sleep(&mut self, duration: Duration) {
        self.slept += duration;
    }

    fn poll_input(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.script.pop_front().flatten())
    }

    /// Skips empty polls; an exhausted script answers with a plain key.
    fn wait_key(&mut self) -> Result<InputEvent> {
        self.waits += 1;
        while let Some(entry) = self.script.pop_front() {
            if let Some(event) = entry {
                return Ok(event);
            }
        }
        Ok(InputEvent::Other)
    }

    fn wait_key_timeout(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        match self.script.pop_front().flatten() {
            Some(event) => Ok(Some(event)),
            None => {
                self.slept += timeout;
                Ok(None)
            }
        }
    }

    fn flush_input(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

/// One call made on a [`RecordingDisplay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drawn {
    Frame,
    Warning,
    Overlay(Overlay),
    QuitPrompt,
    EndScreen,
    CityIntro(u32),
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    /// Every call except plain frames, in order.
    pub drawn: Vec<Drawn>,
    pub frames: usize,
    pub end_screens: usize,
    /// Score shown on the last status line or end screen.
    pub last_score: Option<u32>,
}

impl RecordingDisplay {
    fn record(&mut self, drawn: Drawn) {
        self.drawn.push(drawn);
    }
}

impl Display for RecordingDisplay {
    fn frame(&mut self, session: &Session, _scroll: u64) -> Result<()> {
        self.frames += 1;
        self.last_score = Some(session.score());
        Ok(())
    }

    fn low_altitude_warning(&mut self, _session: &Session, _scroll: u64) -> Result<()> {
        self.record(Drawn::Warning);
        Ok(())
    }

    fn overlay(&mut self, overlay: Overlay, _session: &Session, _scroll: u64) -> Result<()> {
        self.record(Drawn::Overlay(overlay));
        Ok(())
    }

    fn quit_prompt(&mut self, _session: &Session, _scroll: u64) -> Result<()> {
        self.record(Drawn::QuitPrompt);
        Ok(())
    }

    fn end_screen(&mut self, result: &RoundResult, _scroll: u64) -> Result<()> {
        self.end_screens += 1;
        self.last_score = Some(result.score);
        self.record(Drawn::EndScreen);
        Ok(())
    }

    fn city_intro(&mut self, _world: &World, blocks: u32) -> Result<()> {
        self.record(Drawn::CityIntro(blocks));
        Ok(())
    }
}

/// Keeps submitted scores in a list.
#[derive(Debug, Default)]
pub struct MemoryScores {
    pub submitted: Vec<(String, u32)>,
}

impl ScoreSink for MemoryScores {
    fn submit(&mut self, name: &str, score: u32) -> Result<()> {
        self.submitted.push((name.to_string(), score));
        Ok(())
    }
}

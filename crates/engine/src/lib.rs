//! Frame scheduler and input dispatcher for one round of the bomber game.
//!
//! The loop in [`round`] owns pacing and key routing but never talks to a
//! terminal: sleeping, key input and drawing go through the [`FrameScheduler`]
//! and [`Display`] traits, and finished rounds are handed to a [`ScoreSink`].
//! The binary plugs in crossterm-backed implementations; [`headless`] provides
//! scripted ones for tests and benchmarks.

pub mod config;
pub mod headless;
pub mod ports;
pub mod round;

pub use tui_bomber_core as core;
pub use tui_bomber_types as types;

pub use config::Settings;
pub use ports::{Display, FrameScheduler, Overlay, ScoreSink};
pub use round::{city_intro, end_of_round, play, run_round, RoundResult};

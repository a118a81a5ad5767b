//! Terminal rendering for the bomber game.
//!
//! Views paint into a plain [`FrameBuffer`] and never touch the terminal, so
//! they can be unit-tested. [`TerminalRenderer`] is the only part that writes
//! escape sequences, diffing each frame against the previous one.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;
pub mod screens;
pub mod scroller;

pub use tui_bomber_core as core;
pub use tui_bomber_scores as scores;
pub use tui_bomber_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, PAPER};
pub use game_view::{status_line, GameView, Hud};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screens::EndSummary;
pub use scroller::MessageLine;

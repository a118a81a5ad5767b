//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and wraps
//! crossterm's event queue with the non-blocking poll, blocking wait and flush
//! operations the frame scheduler needs.

pub mod keyboard;
pub mod map;

pub use tui_bomber_types as types;

pub use keyboard::Keyboard;
pub use map::{handle_key_event, map_key, should_quit};

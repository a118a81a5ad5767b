//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Playfield Geometry
//!
//! The playfield is the whole terminal, sized once at round start:
//!
//! - **Row 0**: status line (player, score, ammo)
//! - **Rows 1..height-2**: sky and city; buildings grow upward from row `height - 2`
//! - **Row height-1**: scrolling message line
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 60 | Nominal frame period |
//! | `BOMB_STEP_MS` | 20 | Extra pacing while a bomb is falling |
//! | `GUN_STEP_MS` | 10 | Extra pacing per bullet step |
//! | `GUN_HIT_MS` | 100 | Explosion hold after a bullet hit |
//! | `WARNING_MS` | 500 | "Too low to bomb" warning display |
//! | `END_SCROLL_MS` | 50 | Message scroll rate on the end screen |
//!
//! # Examples
//!
//! ```
//! use tui_bomber_types::{GameAction, Heading, InputEvent, BOMBER_SPRITE_RIGHT};
//!
//! let heading = Heading::Right;
//! assert_eq!(heading.dx(), 1);
//! assert_eq!(heading.sprite(), BOMBER_SPRITE_RIGHT);
//!
//! let key = InputEvent::Action(GameAction::DropBomb);
//! assert_eq!(key.action(), Some(GameAction::DropBomb));
//! assert_eq!(InputEvent::Other.action(), None);
//! ```

/// Nominal frame period in milliseconds.
pub const FRAME_MS: u64 = 60;

/// Additional pacing applied on ticks where a bomb advanced.
pub const BOMB_STEP_MS: u64 = 20;

/// Additional pacing applied on every machine-gun step.
pub const GUN_STEP_MS: u64 = 10;

/// Explosion hold after a machine-gun hit.
pub const GUN_HIT_MS: u64 = 100;

/// How long the "too low to bomb" warning stays on screen.
pub const WARNING_MS: u64 = 500;

/// Scroll rate of the message line while the end screen waits.
pub const END_SCROLL_MS: u64 = 50;

/// Frame period of the animated info screen.
pub const INFO_FRAME_MS: u64 = 200;

/// Per-block delay of the city reveal animation.
pub const CITY_REVEAL_MS: u64 = 1;

/// Default machine-gun ammo per round.
pub const DEFAULT_AMMO: u32 = 5;

/// Default bullet range in columns.
pub const DEFAULT_GUN_RANGE: i32 = 20;

/// Rows above the bottom edge the bomber must keep to be allowed to bomb.
pub const DEFAULT_SAFE_ALTITUDE: i32 = 5;

/// Bomb damage radius; 1 means a three-column blast.
pub const DEFAULT_BOMB_RADIUS: i32 = 1;

/// Upper bound for configured gun range, safe altitude and bomb radius;
/// no terminal is wider or taller than this.
pub const MAX_RULE_VALUE: i32 = u16::MAX as i32;

/// Default end-of-round display time in seconds.
pub const DEFAULT_END_PAUSE_SECS: u64 = 3;

/// Columns damaged by a single machine-gun hit.
pub const GUN_SPREAD: i32 = 5;

/// Columns a bullet travels per step.
pub const BULLET_SPEED: i32 = 2;

/// Score awarded per column damaged by a bomb.
pub const BOMB_REWARD: u32 = 10;

/// Score awarded per column damaged by a bullet.
pub const BULLET_REWARD: u32 = 5;

/// Bomber sprite width in columns.
pub const BOMBER_WIDTH: i32 = 4;

/// Bomber sprite while flying right.
pub const BOMBER_SPRITE_RIGHT: &str = "^==-";

/// Bomber sprite while flying left.
pub const BOMBER_SPRITE_LEFT: &str = "-==^";

pub const BUILDING_GLYPH: char = '#';
pub const BOMB_GLYPH: char = '*';
pub const BULLET_GLYPH: char = '-';

/// Capacity of the high score table.
pub const MAX_SCORES: usize = 10;

/// Maximum stored player name length in characters.
pub const MAX_NAME_LEN: usize = 19;

/// Name used before the player enters one and for empty score slots.
pub const DEFAULT_PLAYER_NAME: &str = "Player";


/// Horizontal flight direction of the bomber and its bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    /// Column delta for one step in this direction.
    pub fn dx(self) -> i32 {
        match self {
            Heading::Left => -1,
            Heading::Right => 1,
        }
    }

    /// Sprite drawn for a bomber flying in this direction.
    pub fn sprite(self) -> &'static str {
        match self {
            Heading::Left => BOMBER_SPRITE_LEFT,
            Heading::Right => BOMBER_SPRITE_RIGHT,
        }
    }
}

/// Player actions routed by the input dispatcher.
///
/// These are the only keys the game loop reacts to; every other key press
/// arrives as [`InputEvent::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Release a bomb below the bomber
    DropBomb,
    /// Fire one machine-gun burst ahead of the nose
    FireGun,
    /// Toggle the pause overlay
    Pause,
    /// Toggle the help overlay
    Help,
    /// Leave the round (after confirmation)
    Quit,
}

/// A single key press as seen by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    /// Any key without a gameplay binding. Still counts as "a key" for
    /// prompts that wait for any key.
    Other,
}

impl InputEvent {
    pub fn action(self) -> Option<GameAction> {
        match self {
            InputEvent::Action(action) => Some(action),
            InputEvent::Other => None,
        }
    }
}

/// Why a round ended without a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashReason {
    /// The bomber's center or nose entered a building column.
    City,
}

impl CrashReason {
    pub fn message(&self) -> &'static str {
        match self {
            CrashReason::City => "Crashed into city!",
        }
    }
}

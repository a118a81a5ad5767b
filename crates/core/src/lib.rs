//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the gameplay rules and round state for the bomber game.
//! It has **zero dependencies** on terminals, clocks, or files, making it:
//!
//! - **Deterministic**: Same seed and field size produce identical cities
//! - **Testable**: Every rule is exercised by plain unit tests
//! - **Portable**: The same session runs under the terminal loop or headless
//!
//! # Module Structure
//!
//! - [`world`]: per-column building heights, damage and clamping helpers
//! - [`bomber`]: aircraft motion, edge bounce, collision detection
//! - [`bomb`]: single falling bomb with radius damage
//! - [`gun`]: single machine-gun bullet with range and spread damage
//! - [`session`]: one round's state and the per-tick ordering of components
//! - [`rng`]: LCG used for skyline generation
//!
//! # Example
//!
//! ```
//! use tui_bomber_core::{Field, GameRules, Session};
//!
//! let mut session = Session::new(Field::new(80, 24), GameRules::default(), 7);
//! session.fire_gun();
//! session.tick();
//!
//! assert_eq!(session.bomber().x, 1);
//! assert_eq!(session.ammo(), GameRules::default().ammo - 1);
//! ```

pub mod bomb;
pub mod bomber;
pub mod gun;
pub mod rng;
pub mod session;
pub mod world;

pub use tui_bomber_types as types;

// Re-export commonly used types for convenience
pub use bomb::{Bomb, BombEvent};
pub use bomber::{Bomber, Motion};
pub use gun::{Bullet, GunEvent};
pub use rng::SimpleRng;
pub use session::{DropOutcome, FireOutcome, GameRules, RoundStatus, Session, TickReport};
pub use world::{Field, World};

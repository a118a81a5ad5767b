//! Bomb state machine
//!
//! `Idle -> Falling -> Impact -> Idle`. Idle is `Session::bomb == None`; a
//! falling bomb drops one row per tick and explodes on reaching the row just
//! above its column's building (or the ground row for an empty column).

use crate::bomber::Bomber;
use crate::session::Session;
use crate::types::{Heading, BOMB_REWARD};
use crate::world::World;

/// A falling bomb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bomb {
    pub x: i32,
    pub y: i32,
}

impl Bomb {
    /// Release a bomb from under the bomber's belly.
    pub fn release(bomber: &Bomber, world: &World) -> Self {
        let offset = match bomber.heading {
            Heading::Right => 2,
            Heading::Left => 1,
        };
        let x = world
            .clamp_column(bomber.x + offset)
            .map(|c| c as i32)
            .unwrap_or(0);
        Self {
            x,
            y: bomber.y + 1,
        }
    }

    /// Row at which this bomb explodes for the current skyline.
    pub fn impact_row(&self, world: &World, screen_height: i32) -> i32 {
        world.top_row(self.x, screen_height) - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BombEvent {
    Falling,
    /// Exploded; `damaged` columns lost a block.
    Impact { damaged: u32 },
}

/// Drop the active bomb one row and resolve the impact.
///
/// Returns `None` when no bomb is falling.
pub fn advance(session: &mut Session) -> Option<BombEvent> {
    let mut bomb = session.bomb?;
    bomb.y += 1;

    if bomb.y < bomb.impact_row(&session.world, session.field.height) {
        session.bomb = Some(bomb);
        return Some(BombEvent::Falling);
    }

    // Only columns inside the city can take damage.
    let radius = session.rules.bomb_radius.max(0);
    let last = session.world.width() as i32 - 1;
    let from = bomb.x.saturating_sub(radius).max(0);
    let to = bomb.x.saturating_add(radius).min(last);
    let damaged = session.world.damage(from..=to, 1);
    session.award(damaged * BOMB_REWARD);
    session.bomb = None;

    Some(BombEvent::Impact { damaged })
}

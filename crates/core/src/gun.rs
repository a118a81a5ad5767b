//! Machine-gun state machine
//!
//! `Idle -> Firing -> Resolved -> Idle`. A bullet leaves just ahead of the
//! bomber's nose, moves two columns per tick and resolves on the first of:
//! hitting a building, leaving the screen, or reaching the gun's range. Hit
//! tests use the column clamped to the screen.

use crate::bomber::Bomber;
use crate::session::Session;
use crate::types::{Heading, BULLET_REWARD, BULLET_SPEED, GUN_SPREAD};

/// A bullet in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub direction: Heading,
    /// Columns travelled since firing.
    pub distance: i32,
}

impl Bullet {
    /// Spawn a bullet one column in front of the nose.
    ///
    /// Flying left this may start off-screen; the first step resolves it.
    pub fn fire(bomber: &Bomber) -> Self {
        let x = match bomber.heading {
            Heading::Right => bomber.x + 5,
            Heading::Left => bomber.x - 2,
        };
        Self {
            x,
            y: bomber.y,
            direction: bomber.heading,
            distance: 0,
        }
    }
}

/// How a step of the bullet ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GunEvent {
    /// Still travelling.
    Flying,
    OffScreen,
    /// Hit a building; `damaged` columns lost a block.
    Hit { damaged: u32 },
    /// Reached the gun's range without hitting anything.
    OutOfRange,
}

impl GunEvent {
    /// Whether the bullet is gone after this event.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, GunEvent::Flying)
    }
}

/// Move the active bullet one step and resolve it.
///
/// Returns `None` when no bullet is in flight.
pub fn advance(session: &mut Session) -> Option<GunEvent> {
    let mut bullet = session.bullet?;
    let dx = bullet.direction.dx();
    bullet.x += dx * BULLET_SPEED;
    bullet.distance += BULLET_SPEED;

    let field = session.field;
    let on_screen = field.contains_column(bullet.x);
    // A bullet leaving the screen is still checked against the edge column.
    let impact = session
        .world
        .clamp_column(bullet.x)
        .map(|column| column as i32)
        .filter(|&column| {
            session.world.height_at(column) > 0
                && bullet.y >= session.world.top_row(column, field.height)
        });

    let event = if let Some(column) = impact {
        let spread = (0..GUN_SPREAD).map(|i| column + i * dx);
        let damaged = session.world.damage(spread, 1);
        session.award(damaged * BULLET_REWARD);
        session.destruction_cooldown = 1;
        GunEvent::Hit { damaged }
    } else if !on_screen {
        GunEvent::OffScreen
    } else if bullet.distance >= session.rules.gun_range {
        GunEvent::OutOfRange
    } else {
        GunEvent::Flying
    };

    session.bullet = if event.is_resolved() {
        None
    } else {
        Some(bullet)
    };
    Some(event)
}

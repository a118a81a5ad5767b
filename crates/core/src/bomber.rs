//! Bomber motion controller
//!
//! The bomber flies one column per tick. On reaching either horizontal bound
//! it turns around and drops one row, so every pass over the city is lower
//! than the last.

use crate::session::Session;
use crate::types::{CrashReason, Heading};

/// Aircraft position; `x` is the left edge of the 4-glyph sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bomber {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
}

impl Bomber {
    /// Starting position: top-left, flying right.
    pub fn spawn() -> Self {
        Self {
            x: 0,
            y: 1,
            heading: Heading::Right,
        }
    }

    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    pub fn center_x(&self) -> i32 {
        self.x + 2
    }

    /// Leading glyph column for the current heading.
    pub fn nose_x(&self) -> i32 {
        match self.heading {
            Heading::Right => self.x + 3,
            Heading::Left => self.x,
        }
    }

    /// Columns tested for collisions.
    ///
    /// Only center and nose are sampled; the tail may clip a building
    /// without a crash.
    pub fn collision_points(&self) -> [i32; 2] {
        [self.center_x(), self.nose_x()]
    }
}

impl Default for Bomber {
    fn default() -> Self {
        Self::spawn()
    }
}

/// Outcome of one motion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// The destruction cooldown swallowed this tick.
    Held,
    Moved,
    /// Moved, hit a bound, turned around (and descended if above the floor).
    Turned,
    /// Flew into a building; the round is over.
    Crashed,
}

/// Advance the bomber by one tick and check for collisions.
pub fn advance(session: &mut Session) -> Motion {
    if session.destruction_cooldown > 0 {
        session.destruction_cooldown -= 1;
        return Motion::Held;
    }

    let field = session.field;
    let bomber = &mut session.bomber;
    bomber.x += bomber.heading.dx();

    let mut motion = Motion::Moved;
    let bound = if bomber.x >= field.bomber_max_x() {
        Some((field.bomber_max_x(), Heading::Left))
    } else if bomber.x <= 0 {
        Some((0, Heading::Right))
    } else {
        None
    };

    if let Some((x, heading)) = bound {
        bomber.x = x;
        bomber.heading = heading;
        if bomber.y < field.floor_row() {
            bomber.y += 1;
        }
        motion = Motion::Turned;
    }

    let bomber = *bomber;
    for x in bomber.collision_points() {
        if !field.contains_column(x) {
            continue;
        }
        let height = session.world.height_at(x);
        if height > 0 && bomber.y >= session.world.top_row(x, field.height) {
            session.crash(CrashReason::City);
            return Motion::Crashed;
        }
    }

    motion
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{GameRules, RoundStatus};
    use crate::world::{Field, World};

    fn session_with(heights: Vec<u16>, width: u16, height: u16) -> Session {
        Session::with_world(
            Field::new(width, height),
            World::from_heights(heights),
            GameRules::default(),
        )
    }

    #[test]
    fn test_moves_one_column_per_tick() {
        let mut s = session_with(vec![1; 40], 40, 20);
        assert_eq!(advance(&mut s), Motion::Moved);
        assert_eq!(s.bomber().x, 1);
        assert_eq!(s.bomber().y, 1);
    }

    #[test]
    fn test_turns_at_right_bound_and_descends() {
        let mut s = session_with(vec![1; 40], 40, 20);
        *s.bomber_mut() = Bomber::new(35, 3, Heading::Right);

        assert_eq!(advance(&mut s), Motion::Turned);
        assert_eq!(*s.bomber(), Bomber::new(36, 4, Heading::Left));
    }

    #[test]
    fn test_turns_at_left_bound_and_descends() {
        let mut s = session_with(vec![1; 40], 40, 20);
        *s.bomber_mut() = Bomber::new(0, 5, Heading::Left);

        assert_eq!(advance(&mut s), Motion::Turned);
        assert_eq!(*s.bomber(), Bomber::new(0, 6, Heading::Right));
    }

    #[test]
    fn test_does_not_descend_below_floor() {
        let mut s = session_with(vec![0; 40], 40, 20);
        *s.bomber_mut() = Bomber::new(1, 18, Heading::Left);

        advance(&mut s);
        assert_eq!(s.bomber().y, 18);
        assert_eq!(s.bomber().heading, Heading::Right);
    }

    #[test]
    fn test_crashes_into_building_at_center() {
        // height 20, building of 5 => top row 14.
        let mut heights = vec![0; 40];
        heights[12] = 5;
        let mut s = session_with(heights, 40, 20);
        *s.bomber_mut() = Bomber::new(9, 14, Heading::Right);

        // x becomes 10: center 12 is inside the building.
        assert_eq!(advance(&mut s), Motion::Crashed);
        assert_eq!(s.status(), RoundStatus::Crashed(CrashReason::City));
    }

    #[test]
    fn test_above_building_top_is_safe() {
        let mut heights = vec![0; 40];
        heights[12] = 5;
        let mut s = session_with(heights, 40, 20);
        *s.bomber_mut() = Bomber::new(9, 13, Heading::Right);

        assert_eq!(advance(&mut s), Motion::Moved);
        assert_eq!(s.status(), RoundStatus::Playing);
    }

    #[test]
    fn test_nose_collision_depends_on_heading() {
        let mut heights = vec![0; 40];
        heights[20] = 5;

        // Heading right: nose = x + 3.
        let mut s = session_with(heights.clone(), 40, 20);
        *s.bomber_mut() = Bomber::new(16, 15, Heading::Right);
        assert_eq!(advance(&mut s), Motion::Crashed);

        // Heading left: nose = x.
        let mut s = session_with(heights, 40, 20);
        *s.bomber_mut() = Bomber::new(21, 15, Heading::Left);
        assert_eq!(advance(&mut s), Motion::Crashed);
    }

    #[test]
    fn test_tail_is_not_checked() {
        // Heading right, the tail is at x. A building under the tail alone
        // does not end the round.
        let mut heights = vec![0; 40];
        heights[10] = 10;
        let mut s = session_with(heights, 40, 20);
        *s.bomber_mut() = Bomber::new(9, 15, Heading::Right);

        assert_eq!(advance(&mut s), Motion::Moved);
        assert_eq!(s.bomber().x, 10);
        assert_eq!(s.status(), RoundStatus::Playing);
    }

    #[test]
    fn test_cooldown_skips_motion_and_collision() {
        let mut s = session_with(vec![10; 40], 40, 20);
        *s.bomber_mut() = Bomber::new(5, 15, Heading::Right);
        s.destruction_cooldown = 1;

        assert_eq!(advance(&mut s), Motion::Held);
        assert_eq!(s.bomber().x, 5);
        assert_eq!(s.destruction_cooldown(), 0);
        assert_eq!(s.status(), RoundStatus::Playing);

        assert_eq!(advance(&mut s), Motion::Crashed);
    }
}

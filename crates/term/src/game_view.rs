//! GameView: maps a `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (one terminal cell per game cell, no scaling):
//!
//! ```text
//! row 0            Player: Ace  Score: 40  Ammo: 3
//! row 1..          ^==-      *
//!                         #       -
//! row height-2     ##########################
//! row height-1     scrolling message line
//! ```

use crate::core::{Session, World};
use crate::fb::{FrameBuffer, PAPER};
use crate::palette;
use crate::scroller::MessageLine;
use crate::types::{BOMB_GLYPH, BUILDING_GLYPH, BULLET_GLYPH};

/// Non-gameplay text drawn around the playfield.
#[derive(Debug, Clone, Copy)]
pub struct Hud<'a> {
    pub player: &'a str,
    pub message: &'a MessageLine,
    /// Scroll offset of the message line.
    pub scroll: u64,
}

/// Stateless renderer for the playfield.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the current round into an existing framebuffer.
    ///
    /// The framebuffer is resized to the session's field; callers can reuse
    /// one buffer for the whole round.
    pub fn render_into(&self, session: &Session, hud: &Hud<'_>, fb: &mut FrameBuffer) {
        let field = session.field();
        fb.resize(field.width.max(0) as u16, field.height.max(0) as u16);
        fb.clear(palette::TEXT.into_cell(' '));

        draw_city(fb, session.world(), None);

        let bomber = session.bomber();
        fb.plot_str(bomber.x, bomber.y, bomber.heading.sprite(), palette::BOMBER);

        if let Some(bomb) = session.bomb() {
            fb.plot(bomb.x, bomb.y, BOMB_GLYPH, palette::BOMB);
        }
        if let Some(bullet) = session.bullet() {
            fb.plot(bullet.x, bullet.y, BULLET_GLYPH, palette::BOMB);
        }

        let status = status_line(hud.player, session.score(), session.ammo());
        fb.put_str(0, 0, &status, palette::STATUS);

        if let Some(last) = fb.height().checked_sub(1) {
            hud.message.render(fb, last, hud.scroll);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session, hud: &Hud<'_>) -> FrameBuffer {
        let field = session.field();
        let mut fb = FrameBuffer::new(field.width.max(0) as u16, field.height.max(0) as u16);
        self.render_into(session, hud, &mut fb);
        fb
    }

    /// Render only the first `blocks` building blocks, column by column.
    ///
    /// Used by the intro animation that raises the city before the first frame.
    pub fn render_city_reveal(&self, world: &World, blocks: u32, fb: &mut FrameBuffer) {
        fb.clear(palette::TEXT.into_cell(' '));
        draw_city(fb, world, Some(blocks));
    }

    /// Draw the "too low to bomb" warning on top of the current frame.
    pub fn draw_low_altitude_warning(&self, fb: &mut FrameBuffer, safe_altitude: i32) {
        let text = format!("TOO LOW TO BOMB! (Need {} units)", safe_altitude);
        fb.put_str(0, 1, &text, palette::TEXT.bold());
    }
}

/// Status line text for row 0.
pub fn status_line(player: &str, score: u32, ammo: u32) -> String {
    format!("Player: {}  Score: {}  Ammo: {}", player, score, ammo)
}

/// Paint buildings bottom-up; `limit` caps the number of blocks drawn.
fn draw_city(fb: &mut FrameBuffer, world: &World, limit: Option<u32>) {
    let height = fb.height() as i32;
    let mut budget = limit.unwrap_or(u32::MAX);
    for (x, &h) in world.heights().iter().enumerate() {
        for y in 0..h as i32 {
            if budget == 0 {
                return;
            }
            budget -= 1;
            fb.plot(x as i32, height - y - 2, BUILDING_GLYPH, palette::BUILDING);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, GameRules};

    #[test]
    fn test_city_blocks_sit_on_row_above_message() {
        let field = Field::new(4, 6);
        let session = Session::with_world(
            field,
            World::from_heights(vec![0, 2, 0, 1]),
            GameRules::default(),
        );
        let message = MessageLine::new("m");
        let hud = Hud {
            player: "P",
            message: &message,
            scroll: 0,
        };

        let fb = GameView::new().render(&session, &hud);
        assert_eq!(fb.row_text(4), " # #");
        assert_eq!(fb.row_text(3), " #  ");
        assert_eq!(fb.get(1, 4).unwrap().style, palette::BUILDING);
    }

    #[test]
    fn test_background_is_paper() {
        let session = Session::with_world(Field::new(3, 4), World::flat(3), GameRules::default());
        let message = MessageLine::default();
        let hud = Hud {
            player: "P",
            message: &message,
            scroll: 0,
        };
        let fb = GameView::new().render(&session, &hud);
        assert!(fb.cells().iter().all(|c| c.style.bg == PAPER));
    }

    #[test]
    fn test_reveal_draws_partial_city() {
        let world = World::from_heights(vec![2, 2]);
        let mut fb = FrameBuffer::new(2, 5);
        GameView::new().render_city_reveal(&world, 3, &mut fb);
        assert_eq!(fb.row_text(3), "##");
        assert_eq!(fb.row_text(2), "# ");
    }

    #[test]
    fn test_status_line_format() {
        assert_eq!(status_line("Ace", 40, 3), "Player: Ace  Score: 40  Ammo: 3");
    }
}

//! World module - the city heightmap
//!
//! The city is a 1-D heightmap: one building height per terminal column.
//! Buildings stand on row `height - 2` (the row above the message line) and grow
//! upward, so the top block of column `c` sits on row `height - world[c] - 1`.
//!
//! All indexing goes through the clamping helpers here; callers never index the
//! height vector directly, so out-of-range columns are clipped instead of panicking.

use crate::rng::SimpleRng;
use crate::types::BOMBER_WIDTH;

/// Playfield dimensions in terminal cells, fixed for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

impl Field {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
        }
    }

    /// Whether `x` is a visible column.
    pub fn contains_column(&self, x: i32) -> bool {
        x >= 0 && x < self.width
    }

    /// Rightmost column the bomber's left edge may occupy.
    pub fn bomber_max_x(&self) -> i32 {
        (self.width - BOMBER_WIDTH).max(0)
    }

    /// Lowest row the bomber may descend to.
    pub fn floor_row(&self) -> i32 {
        self.height - 2
    }
}

/// Per-column building heights.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct World {
    heights: Vec<u16>,
}

impl World {
    /// Build a world from explicit heights (one per column).
    pub fn from_heights(heights: Vec<u16>) -> Self {
        Self { heights }
    }

    /// Empty city of the given width.
    pub fn flat(width: usize) -> Self {
        Self {
            heights: vec![0; width],
        }
    }

    /// Generate a random skyline for `field`.
    ///
    /// Every column gets a building between 1 and `height / 3` rows tall.
    pub fn generate(field: Field, rng: &mut SimpleRng) -> Self {
        let max = (field.height / 3).max(1) as u32;
        let heights = (0..field.width.max(0))
            .map(|_| (rng.next_range(max) + 1) as u16)
            .collect();
        Self { heights }
    }

    pub fn width(&self) -> usize {
        self.heights.len()
    }

    pub fn heights(&self) -> &[u16] {
        &self.heights
    }

    /// Clamp a possibly out-of-range column to the nearest valid one.
    ///
    /// Returns `None` only for an empty world.
    pub fn clamp_column(&self, x: i32) -> Option<usize> {
        if self.heights.is_empty() {
            return None;
        }
        let max = self.heights.len() as i32 - 1;
        Some(x.clamp(0, max) as usize)
    }

    fn index(&self, x: i32) -> Option<usize> {
        if x < 0 || x as usize >= self.heights.len() {
            return None;
        }
        Some(x as usize)
    }

    /// Building height at column `x`; 0 outside the city.
    pub fn height_at(&self, x: i32) -> u16 {
        self.index(x).map(|i| self.heights[i]).unwrap_or(0)
    }

    /// Row of the top block at column `x` for a screen `screen_height` rows tall.
    ///
    /// For an empty column this is the row just below the ground row.
    pub fn top_row(&self, x: i32, screen_height: i32) -> i32 {
        screen_height - self.height_at(x) as i32 - 1
    }

    /// Whether column `x` has no building left (or is off-screen).
    pub fn is_column_clear(&self, x: i32) -> bool {
        self.height_at(x) == 0
    }

    /// Lower every in-range column in `columns` by `amount` (floor 0).
    ///
    /// Returns how many columns actually lost height; already-cleared and
    /// out-of-range columns do not count.
    pub fn damage<I>(&mut self, columns: I, amount: u16) -> u32
    where
        I: IntoIterator<Item = i32>,
    {
        let mut damaged = 0;
        for x in columns {
            let Some(i) = self.index(x) else {
                continue;
            };
            let h = &mut self.heights[i];
            if *h > 0 && amount > 0 {
                *h = h.saturating_sub(amount);
                damaged += 1;
            }
        }
        damaged
    }

    /// True once every building is gone.
    pub fn is_cleared(&self) -> bool {
        self.heights.iter().all(|&h| h == 0)
    }

    /// Total remaining blocks, handy for progress displays and tests.
    pub fn remaining_blocks(&self) -> u32 {
        self.heights.iter().map(|&h| h as u32).sum()
    }
}

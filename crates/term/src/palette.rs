//! Colors for every element drawn on the white game background.

use crate::fb::{CellStyle, Rgb};

pub const BOMBER: CellStyle = CellStyle::ink(Rgb::new(0, 0, 160));
pub const BUILDING: CellStyle = CellStyle::ink(Rgb::new(200, 0, 0));
pub const BOMB: CellStyle = CellStyle::ink(Rgb::new(0, 0, 0));
pub const TEXT: CellStyle = CellStyle::ink(Rgb::new(0, 0, 0));
pub const MESSAGE: CellStyle = CellStyle::ink(Rgb::new(200, 0, 200));
pub const STATUS: CellStyle = CellStyle::ink(Rgb::new(0, 140, 0));

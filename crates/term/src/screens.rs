//! Full-screen views outside the playfield: menu, help, info, pause, quit
//! prompt, end of round, name entry and the score table.
//!
//! Every function paints into a framebuffer and returns; waiting for keys is
//! the caller's job.

use crate::fb::FrameBuffer;
use crate::palette;
use crate::scores::ScoreEntry;
use crate::scroller::MessageLine;

/// Lines of the cow drawn on the info screen.
const COW: [&str; 5] = ["   \\_/", "  (o o)", " /  V  \\", "/(  _  )\\", "  ^^ ^^"];

/// Subtitles that scroll upward on the info screen.
pub const INFO_SUBTITLES: [&str; 4] = [
    "Bombs destroy 3x3 area",
    "Machine gun destroys 5 blocks",
    "Watch your altitude!",
    "Good luck pilot!",
];

fn blank(fb: &mut FrameBuffer) {
    fb.clear(palette::TEXT.into_cell(' '));
}

fn last_row(fb: &FrameBuffer) -> u16 {
    fb.height().saturating_sub(1)
}

fn center_x(fb: &FrameBuffer, offset: i32) -> i32 {
    fb.width() as i32 / 2 + offset
}

fn score_table(fb: &mut FrameBuffer, scores: &[ScoreEntry]) {
    fb.plot_str(center_x(fb, -10), 6, "=== TOP 10 SCORES ===", palette::TEXT);
    for (i, entry) in scores.iter().enumerate() {
        let line = format!("{:2}. {:<20} {:5}", i + 1, entry.name, entry.score);
        fb.plot_str(center_x(fb, -10), 8 + i as i32, &line, palette::TEXT);
    }
}

/// Main menu with the top scores.
pub fn menu(fb: &mut FrameBuffer, scores: &[ScoreEntry]) {
    blank(fb);
    fb.plot_str(center_x(fb, -10), 0, "=== BOMBER GAME ===", palette::TEXT.bold());
    score_table(fb, scores);

    let items = [
        "1. Start New Game",
        "2. Game Info",
        "3. Help",
        "4. Show All Scores",
        "5. Quit",
    ];
    for (i, item) in items.iter().enumerate() {
        fb.put_str(0, 18 + i as u16, item, palette::TEXT);
    }
}

/// Every stored score, one per row.
pub fn all_scores(fb: &mut FrameBuffer, scores: &[ScoreEntry]) {
    blank(fb);
    fb.plot_str(center_x(fb, -10), 0, "=== ALL SCORES ===", palette::TEXT.bold());
    let max_row = fb.height() as i32 - 2;
    for (i, entry) in scores.iter().enumerate() {
        let row = 2 + i as i32;
        if row >= max_row {
            break;
        }
        let line = format!("{}: {}", entry.name, entry.score);
        fb.plot_str(center_x(fb, -10), row, &line, palette::TEXT);
    }
    press_any_key(fb, "Press any key to return");
}

fn press_any_key(fb: &mut FrameBuffer, text: &str) {
    let y = fb.height() as i32 - 2;
    fb.plot_str(center_x(fb, -15), y, text, palette::TEXT);
}

/// Controls and rules. Doubles as the in-game help overlay.
pub fn help(fb: &mut FrameBuffer, ammo: u32, message: &MessageLine, scroll: u64) {
    blank(fb);
    let mut row = 2;
    fb.plot_str(center_x(fb, -10), row, "=== BOMBER GAME HELP ===", palette::TEXT.bold());
    row += 3;
    fb.plot_str(2, row, "Controls:", palette::TEXT.bold());

    let controls = [
        "Down Arrow - Drop bomb".to_string(),
        format!("Spacebar - Machine gun ({} ammo)", ammo),
        "P - Pause game".to_string(),
        "Q - Quit game".to_string(),
        "H - This help screen".to_string(),
    ];
    for line in &controls {
        row += 1;
        fb.plot_str(4, row, line, palette::TEXT);
    }

    row += 2;
    fb.plot_str(2, row, "Game Rules:", palette::TEXT.bold());
    row += 1;
    let rules = [
        "- Destroy all city blocks (#) to win",
        "- Avoid crashing into buildings",
        "- Bombs destroy 3-block wide area",
    ];
    for line in rules {
        row += 1;
        fb.plot_str(4, row, line, palette::TEXT);
    }

    press_any_key(fb, "Press H to return to game");
    message.render(fb, last_row(fb), scroll);
}

/// Pause overlay.
pub fn pause(fb: &mut FrameBuffer, message: &MessageLine, scroll: u64) {
    blank(fb);
    let mid = fb.height() as i32 / 2;
    fb.plot_str(center_x(fb, -5), mid, "PAUSED", palette::TEXT.bold());
    fb.plot_str(center_x(fb, -10), mid + 1, "Press P to continue", palette::TEXT);
    message.render(fb, last_row(fb), scroll);
}

/// Quit confirmation drawn over the current frame.
pub fn quit_prompt(fb: &mut FrameBuffer) {
    let mid = fb.height() as i32 / 2;
    fb.plot_str(center_x(fb, -5), mid, "Quit Game", palette::TEXT.bold());
    fb.plot_str(
        center_x(fb, -10),
        mid + 1,
        "Continue by press any key..",
        palette::TEXT,
    );
}

/// Result of a finished round as shown on the end screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndSummary<'a> {
    pub won: bool,
    pub score: u32,
    /// Crash message; `None` for wins.
    pub crash: Option<&'a str>,
}

/// End-of-round screen.
pub fn end_screen(fb: &mut FrameBuffer, summary: &EndSummary<'_>, message: &MessageLine, scroll: u64) {
    blank(fb);
    let mid = fb.height() as i32 / 2;
    let title = if summary.won { "WELL DONE!" } else { "GAME OVER!" };
    fb.plot_str(center_x(fb, -4), mid, title, palette::TEXT.bold());
    fb.plot_str(
        center_x(fb, -8),
        mid + 1,
        &format!("Score: {}", summary.score),
        palette::TEXT,
    );
    if let Some(crash) = summary.crash {
        fb.plot_str(center_x(fb, -10), mid + 2, crash, palette::TEXT);
    }
    message.render(fb, last_row(fb), scroll);
}

/// Boxed name prompt with the text typed so far.
pub fn name_prompt(fb: &mut FrameBuffer, typed: &str) {
    blank(fb);
    let y = fb.height() as i32 / 2;
    let x = center_x(fb, -15);
    fb.plot_str(x, y - 2, "-----------------------------", palette::TEXT);
    fb.plot_str(x, y - 1, "| ENTER YOUR NAME:          |", palette::TEXT);
    fb.plot_str(x, y, "|                           |", palette::TEXT);
    fb.plot_str(x, y + 1, "-----------------------------", palette::TEXT);
    fb.plot_str(x + 2, y, typed, palette::TEXT.bold());
    fb.plot(x + 2 + typed.chars().count() as i32, y, '_', palette::TEXT);
}

/// Animated info screen; `scroll` drives the subtitle and message motion.
pub fn info(fb: &mut FrameBuffer, message: &MessageLine, scroll: u64) {
    blank(fb);
    let mut row = 2;
    for line in COW {
        fb.plot_str(center_x(fb, -3), row, line, palette::TEXT);
        row += 1;
    }

    row += 2;
    let lines = [
        ("=== BOMBER GAME ===", -10),
        ("Fly your bomber plane", -12),
        ("Destroy enemy buildings", -12),
        ("Avoid crashing!", -12),
    ];
    for (text, offset) in lines {
        fb.plot_str(center_x(fb, offset), row, text, palette::TEXT);
        row += 1;
    }

    let height = fb.height() as i64;
    let cycle = height + INFO_SUBTITLES.len() as i64 + 10;
    for (i, subtitle) in INFO_SUBTITLES.iter().enumerate() {
        let y = (height + 2) + i as i64 - (scroll as i64 % cycle);
        if (0..height).contains(&y) {
            fb.put_str_centered(y as u16, 0, subtitle, palette::MESSAGE);
        }
    }

    press_any_key(fb, "Press any key to return");
    message.render(fb, last_row(fb), scroll);
}

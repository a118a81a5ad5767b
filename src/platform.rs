//! crossterm-backed implementations of the engine's scheduler and display.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use tui_bomber::core::{Field, Session, World};
use tui_bomber::engine::{Display, FrameScheduler, Overlay, RoundResult};
use tui_bomber::input::{map_key, Keyboard};
use tui_bomber::term::{
    screens, EndSummary, FrameBuffer, GameView, Hud, MessageLine, TerminalRenderer,
};
use tui_bomber::types::InputEvent;

/// Wall-clock sleeps and the real keyboard.
#[derive(Debug, Default)]
pub struct TerminalScheduler {
    keyboard: Keyboard,
}

impl FrameScheduler for TerminalScheduler {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }

    fn poll_input(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.keyboard.poll()?.map(map_key))
    }

    fn wait_key(&mut self) -> Result<InputEvent> {
        Ok(map_key(self.keyboard.wait()?))
    }

    fn wait_key_timeout(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        Ok(self.keyboard.wait_timeout(timeout)?.map(map_key))
    }

    fn flush_input(&mut self) -> Result<()> {
        let dropped = self.keyboard.flush()?;
        if dropped > 0 {
            log::debug!("flushed {dropped} pending input events");
        }
        Ok(())
    }
}

/// Draws rounds through the diffing terminal renderer.
pub struct TerminalDisplay<'a> {
    renderer: &'a mut TerminalRenderer,
    fb: FrameBuffer,
    view: GameView,
    player: &'a str,
    message: &'a MessageLine,
    ammo: u32,
}

impl<'a> TerminalDisplay<'a> {
    pub fn new(
        renderer: &'a mut TerminalRenderer,
        field: Field,
        player: &'a str,
        message: &'a MessageLine,
        ammo: u32,
    ) -> Self {
        let fb = FrameBuffer::new(field.width.max(0) as u16, field.height.max(0) as u16);
        Self {
            renderer,
            fb,
            view: GameView::new(),
            player,
            message,
            ammo,
        }
    }

    fn paint_frame(&mut self, session: &Session, scroll: u64) {
        let hud = Hud {
            player: self.player,
            message: self.message,
            scroll,
        };
        self.view.render_into(session, &hud, &mut self.fb);
    }

    fn present(&mut self) -> Result<()> {
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl Display for TerminalDisplay<'_> {
    fn frame(&mut self, session: &Session, scroll: u64) -> Result<()> {
        self.paint_frame(session, scroll);
        self.present()
    }

    fn low_altitude_warning(&mut self, session: &Session, scroll: u64) -> Result<()> {
        self.paint_frame(session, scroll);
        self.view
            .draw_low_altitude_warning(&mut self.fb, session.rules().safe_altitude);
        self.present()
    }

    fn overlay(&mut self, overlay: Overlay, _session: &Session, scroll: u64) -> Result<()> {
        match overlay {
            Overlay::Pause => screens::pause(&mut self.fb, self.message, scroll),
            Overlay::Help => screens::help(&mut self.fb, self.ammo, self.message, scroll),
        }
        self.present()
    }

    fn quit_prompt(&mut self, session: &Session, scroll: u64) -> Result<()> {
        self.paint_frame(session, scroll);
        screens::quit_prompt(&mut self.fb);
        self.present()
    }

    fn end_screen(&mut self, result: &RoundResult, scroll: u64) -> Result<()> {
        let summary = EndSummary {
            won: result.won(),
            score: result.score,
            crash: result.crash().map(|reason| reason.message()),
        };
        screens::end_screen(&mut self.fb, &summary, self.message, scroll);
        self.present()
    }

    fn city_intro(&mut self, world: &World, blocks: u32) -> Result<()> {
        self.view.render_city_reveal(world, blocks, &mut self.fb);
        self.present()
    }
}

//! Menu loop and the screens reached from it.

use std::time::Duration;

use anyhow::Result;

use tui_bomber::core::{Field, Session};
use tui_bomber::engine::{run_round, Settings};
use tui_bomber::input::Keyboard;
use tui_bomber::scores::ScoreStore;
use tui_bomber::term::{screens, FrameBuffer, MessageLine, TerminalRenderer};
use tui_bomber::types::{DEFAULT_PLAYER_NAME, INFO_FRAME_MS};

use crate::menu::{MenuChoice, NameEntry, NameStep};
use crate::platform::{TerminalDisplay, TerminalScheduler};

pub struct App<'a> {
    settings: Settings,
    renderer: &'a mut TerminalRenderer,
    keyboard: Keyboard,
    scores: ScoreStore,
    message: MessageLine,
    player: String,
    /// Shared by the info screen and the menu help screen.
    scroll: u64,
}

impl<'a> App<'a> {
    pub fn new(settings: Settings, renderer: &'a mut TerminalRenderer) -> Self {
        let scores = ScoreStore::open(&settings.score_file);
        Self {
            settings,
            renderer,
            keyboard: Keyboard::new(),
            scores,
            message: MessageLine::from_fortune(),
            player: DEFAULT_PLAYER_NAME.to_string(),
            scroll: 0,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            let mut fb = self.screen()?;
            screens::menu(&mut fb, self.scores.table().entries());
            self.renderer.draw_swap(&mut fb)?;

            let Some(choice) = MenuChoice::from_key(self.keyboard.wait()?) else {
                continue;
            };
            log::debug!("menu: {choice:?}");
            match choice {
                MenuChoice::Play => {
                    self.ask_name()?;
                    self.play()?;
                }
                MenuChoice::Info => self.info()?,
                MenuChoice::Help => self.help()?,
                MenuChoice::Scores => self.all_scores()?,
                MenuChoice::Quit => return Ok(()),
            }
        }
    }

    /// Framebuffer sized to the terminal right now.
    fn screen(&self) -> Result<FrameBuffer> {
        let (width, height) = TerminalRenderer::size()?;
        Ok(FrameBuffer::new(width, height))
    }

    fn ask_name(&mut self) -> Result<()> {
        let mut entry = NameEntry::default();
        loop {
            let mut fb = self.screen()?;
            screens::name_prompt(&mut fb, entry.text());
            self.renderer.draw_swap(&mut fb)?;

            match entry.apply(self.keyboard.wait()?) {
                NameStep::Editing => {}
                NameStep::Done(name) => {
                    self.player = name;
                    return Ok(());
                }
                NameStep::Cancelled => return Ok(()),
            }
        }
    }

    fn play(&mut self) -> Result<()> {
        let (width, height) = TerminalRenderer::size()?;
        let field = Field::new(width, height);
        let seed = self.settings.round_seed();
        log::info!(
            "new round for {} on {}x{} (seed {seed})",
            self.player,
            width,
            height
        );

        let mut session = Session::new(field, self.settings.rules, seed);
        let mut scheduler = TerminalScheduler::default();
        let mut display = TerminalDisplay::new(
            &mut *self.renderer,
            field,
            &self.player,
            &self.message,
            self.settings.rules.ammo,
        );
        run_round(
            &self.player,
            &self.settings,
            &mut session,
            &mut scheduler,
            &mut display,
            &mut self.scores,
        )?;
        self.keyboard.flush()?;
        Ok(())
    }

    fn info(&mut self) -> Result<()> {
        let frame = Duration::from_millis(INFO_FRAME_MS);
        loop {
            let mut fb = self.screen()?;
            screens::info(&mut fb, &self.message, self.scroll);
            self.renderer.draw_swap(&mut fb)?;
            if self.keyboard.wait_timeout(frame)?.is_some() {
                return Ok(());
            }
            self.scroll += 1;
        }
    }

    fn help(&mut self) -> Result<()> {
        let mut fb = self.screen()?;
        screens::help(&mut fb, self.settings.rules.ammo, &self.message, self.scroll);
        self.renderer.draw_swap(&mut fb)?;
        self.keyboard.wait()?;
        Ok(())
    }

    fn all_scores(&mut self) -> Result<()> {
        let mut fb = self.screen()?;
        screens::all_scores(&mut fb, self.scores.table().entries());
        self.renderer.draw_swap(&mut fb)?;
        self.keyboard.wait()?;
        Ok(())
    }
}

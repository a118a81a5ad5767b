//! The fixed-tick round loop.
//!
//! One iteration renders the current frame, advances the session by one tick,
//! paces any weapon sub-steps, dispatches at most one key and then sleeps for
//! the frame period. Overlays and the quit prompt block inside the iteration.

use std::time::Duration;

use anyhow::Result;

use crate::config::Settings;
use crate::core::{
    BombEvent, DropOutcome, FireOutcome, GunEvent, RoundStatus, Session, TickReport,
};
use crate::ports::{Display, FrameScheduler, Overlay, ScoreSink};
use crate::types::{
    CrashReason, GameAction, BOMB_STEP_MS, CITY_REVEAL_MS, END_SCROLL_MS, FRAME_MS, GUN_HIT_MS,
    GUN_STEP_MS, WARNING_MS,
};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub status: RoundStatus,
    pub score: u32,
    pub ticks: u64,
    /// Message line offset reached during play.
    pub scroll: u64,
}

impl RoundResult {
    fn of(session: &Session, scroll: u64) -> Self {
        Self {
            status: session.status(),
            score: session.score(),
            ticks: session.ticks(),
            scroll,
        }
    }

    pub fn won(&self) -> bool {
        self.status == RoundStatus::Won
    }

    pub fn crash(&self) -> Option<CrashReason> {
        match self.status {
            RoundStatus::Crashed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Raise the skyline one block at a time before the first frame.
pub fn city_intro<S, D>(session: &Session, scheduler: &mut S, display: &mut D) -> Result<()>
where
    S: FrameScheduler,
    D: Display,
{
    let total = session.world().remaining_blocks();
    for blocks in 1..=total {
        display.city_intro(session.world(), blocks)?;
        scheduler.sleep(Duration::from_millis(CITY_REVEAL_MS));
    }
    Ok(())
}

/// Run the loop until the round is won, crashed or quit.
pub fn play<S, D>(session: &mut Session, scheduler: &mut S, display: &mut D) -> Result<RoundResult>
where
    S: FrameScheduler,
    D: Display,
{
    let mut scroll: u64 = 0;

    while !session.is_over() {
        if !session.paused() {
            display.frame(session, scroll)?;
            let report = session.tick();
            pace_substeps(scheduler, &report);
            scroll += 1;
            if session.is_over() {
                break;
            }
        }

        if let Some(action) = scheduler.poll_input()?.and_then(|ev| ev.action()) {
            dispatch(action, session, scheduler, display, scroll)?;
        }

        scheduler.sleep(Duration::from_millis(FRAME_MS));
    }

    let result = RoundResult::of(session, scroll);
    log::info!(
        "round over: {:?} score={} ticks={}",
        result.status,
        result.score,
        result.ticks
    );
    Ok(result)
}

fn pace_substeps<S: FrameScheduler>(scheduler: &mut S, report: &TickReport) {
    if let Some(event) = report.bomb {
        scheduler.sleep(Duration::from_millis(BOMB_STEP_MS));
        if let BombEvent::Impact { damaged } = event {
            log::debug!("bomb impact damaged {damaged} columns");
        }
    }
    if let Some(event) = report.gun {
        scheduler.sleep(Duration::from_millis(GUN_STEP_MS));
        if let GunEvent::Hit { damaged } = event {
            log::debug!("gun hit damaged {damaged} columns");
            scheduler.sleep(Duration::from_millis(GUN_HIT_MS));
        }
    }
}

fn dispatch<S, D>(
    action: GameAction,
    session: &mut Session,
    scheduler: &mut S,
    display: &mut D,
    scroll: u64,
) -> Result<()>
where
    S: FrameScheduler,
    D: Display,
{
    match action {
        GameAction::DropBomb => match session.drop_bomb() {
            DropOutcome::TooLow => {
                display.low_altitude_warning(session, scroll)?;
                scheduler.sleep(Duration::from_millis(WARNING_MS));
            }
            outcome => log::trace!("drop bomb: {outcome:?}"),
        },
        GameAction::FireGun => {
            let outcome = session.fire_gun();
            if outcome == FireOutcome::NoAmmo {
                log::debug!("out of ammo");
            }
        }
        GameAction::Quit => {
            display.quit_prompt(session, scroll)?;
            scheduler.wait_key()?;
            session.quit();
        }
        GameAction::Pause | GameAction::Help => {
            if session.paused() {
                session.set_paused(false);
            } else {
                let overlay = if action == GameAction::Pause {
                    Overlay::Pause
                } else {
                    Overlay::Help
                };
                session.set_paused(true);
                scheduler.flush_input()?;
                display.overlay(overlay, session, scroll)?;
                scheduler.flush_input()?;
            }
        }
    }
    Ok(())
}

/// Show the result screen, scrolling the message, until a key or the pause
/// runs out. Quit rounds skip it.
pub fn end_of_round<S, D>(
    result: &RoundResult,
    end_pause: Duration,
    scheduler: &mut S,
    display: &mut D,
) -> Result<()>
where
    S: FrameScheduler,
    D: Display,
{
    if !matches!(result.status, RoundStatus::Won | RoundStatus::Crashed(_)) {
        return Ok(());
    }

    let step = Duration::from_millis(END_SCROLL_MS);
    let mut waited = Duration::ZERO;
    let mut scroll = result.scroll;
    loop {
        display.end_screen(result, scroll)?;
        if waited >= end_pause {
            break;
        }
        if scheduler.wait_key_timeout(step)?.is_some() {
            break;
        }
        waited += step;
        scroll += 1;
    }
    Ok(())
}

/// A whole round: intro, play, result screen and score submission.
///
/// A failing score sink is logged; it never fails the round.
pub fn run_round<S, D, K>(
    player: &str,
    settings: &Settings,
    session: &mut Session,
    scheduler: &mut S,
    display: &mut D,
    scores: &mut K,
) -> Result<RoundResult>
where
    S: FrameScheduler,
    D: Display,
    K: ScoreSink,
{
    city_intro(session, scheduler, display)?;
    let result = play(session, scheduler, display)?;
    end_of_round(&result, settings.end_pause, scheduler, display)?;

    if let Err(err) = scores.submit(player, result.score) {
        log::warn!("failed to save score for {player}: {err:#}");
    }
    Ok(result)
}

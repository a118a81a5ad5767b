//! Session module - the complete state of one round
//!
//! A [`Session`] owns the world, the bomber, the optional bomb and bullet, the
//! ammo counter and the score. The frame scheduler owns exactly one session and
//! hands it by `&mut` to each component's `advance` function, in a fixed order:
//!
//! 1. win check (all columns cleared)
//! 2. bomber motion and collision ([`crate::bomber::advance`])
//! 3. machine-gun bullet ([`crate::gun::advance`])
//! 4. bomb ([`crate::bomb::advance`])
//!
//! Motion runs before the weapons so the one-tick destruction cooldown set by
//! a bullet hit suppresses the collision check of the following tick.

use crate::bomb::{self, Bomb, BombEvent};
use crate::bomber::{self, Bomber, Motion};
use crate::gun::{self, Bullet, GunEvent};
use crate::rng::SimpleRng;
use crate::types::{
    CrashReason, DEFAULT_AMMO, DEFAULT_BOMB_RADIUS, DEFAULT_GUN_RANGE,
    DEFAULT_SAFE_ALTITUDE,
};
use crate::world::{Field, World};

/// Tunable gameplay parameters for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Machine-gun bursts available for the whole round.
    pub ammo: u32,
    /// Columns a bullet may travel before it expires.
    pub gun_range: i32,
    /// Bombing requires `bomber.y < height - safe_altitude`.
    pub safe_altitude: i32,
    /// Columns on each side of the impact column hit by a bomb.
    pub bomb_radius: i32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            ammo: DEFAULT_AMMO,
            gun_range: DEFAULT_GUN_RANGE,
            safe_altitude: DEFAULT_SAFE_ALTITUDE,
            bomb_radius: DEFAULT_BOMB_RADIUS,
        }
    }
}

/// Lifecycle of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Playing,
    /// Every building was destroyed.
    Won,
    Crashed(CrashReason),
    /// The player left through the quit prompt.
    Quit,
}

impl RoundStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundStatus::Playing)
    }
}

/// Result of a drop-bomb request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Dropped,
    /// A bomb is already falling.
    Busy,
    /// The bomber is below the safe bombing altitude.
    TooLow,
    /// Paused or the round is over.
    Ignored,
}

/// Result of a fire-gun request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    Fired,
    /// A bullet is already in flight.
    Busy,
    NoAmmo,
    /// Paused or the round is over.
    Ignored,
}

/// What happened during one [`Session::tick`].
///
/// The scheduler uses this for sub-step pacing and logging; it carries no
/// state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// The tick detected that the city is gone.
    pub won: bool,
    pub motion: Option<Motion>,
    pub gun: Option<GunEvent>,
    pub bomb: Option<BombEvent>,
}

/// Complete state of one round.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) field: Field,
    pub(crate) rules: GameRules,
    pub(crate) world: World,
    pub(crate) bomber: Bomber,
    pub(crate) bomb: Option<Bomb>,
    pub(crate) bullet: Option<Bullet>,
    pub(crate) ammo: u32,
    pub(crate) score: u32,
    pub(crate) paused: bool,
    pub(crate) status: RoundStatus,
    /// Ticks during which bomber motion and collision are skipped.
    pub(crate) destruction_cooldown: u8,
    /// Unpaused ticks processed so far.
    pub(crate) ticks: u64,
}

impl Session {
    /// Start a round with a freshly generated skyline.
    pub fn new(field: Field, rules: GameRules, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let world = World::generate(field, &mut rng);
        Self::with_world(field, world, rules)
    }

    /// Start a round over an explicit skyline.
    ///
    /// The world is resized to the field width (missing columns are empty).
    pub fn with_world(field: Field, world: World, rules: GameRules) -> Self {
        let width = field.width.max(0) as usize;
        let world = if world.width() == width {
            world
        } else {
            let mut heights = world.heights().to_vec();
            heights.resize(width, 0);
            World::from_heights(heights)
        };

        Self {
            field,
            rules,
            world,
            bomber: Bomber::spawn(),
            bomb: None,
            bullet: None,
            ammo: rules.ammo,
            score: 0,
            paused: false,
            status: RoundStatus::Playing,
            destruction_cooldown: 0,
            ticks: 0,
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn bomber(&self) -> &Bomber {
        &self.bomber
    }

    pub fn bomber_mut(&mut self) -> &mut Bomber {
        &mut self.bomber
    }

    pub fn bomb(&self) -> Option<&Bomb> {
        self.bomb.as_ref()
    }

    pub fn bullet(&self) -> Option<&Bullet> {
        self.bullet.as_ref()
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn destruction_cooldown(&self) -> u8 {
        self.destruction_cooldown
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip the paused flag and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// End the round at the player's request.
    pub fn quit(&mut self) {
        if !self.is_over() {
            self.status = RoundStatus::Quit;
        }
    }

    fn accepts_actions(&self) -> bool {
        !self.paused && !self.is_over()
    }

    /// Release a bomb below the bomber if allowed.
    pub fn drop_bomb(&mut self) -> DropOutcome {
        if !self.accepts_actions() {
            return DropOutcome::Ignored;
        }
        if self.bomb.is_some() {
            return DropOutcome::Busy;
        }
        if self.bomber.y >= self.field.height - self.rules.safe_altitude {
            return DropOutcome::TooLow;
        }

        self.bomb = Some(Bomb::release(&self.bomber, &self.world));
        DropOutcome::Dropped
    }

    /// Fire a machine-gun burst if allowed. Ammo is spent immediately.
    pub fn fire_gun(&mut self) -> FireOutcome {
        if !self.accepts_actions() {
            return FireOutcome::Ignored;
        }
        if self.bullet.is_some() {
            return FireOutcome::Busy;
        }
        if self.ammo == 0 {
            return FireOutcome::NoAmmo;
        }

        self.ammo -= 1;
        self.bullet = Some(Bullet::fire(&self.bomber));
        FireOutcome::Fired
    }

    /// Advance the round by one frame.
    ///
    /// Does nothing while paused or after the round ended.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if !self.accepts_actions() {
            return report;
        }

        if self.world.is_cleared() {
            self.status = RoundStatus::Won;
            report.won = true;
            return report;
        }

        self.ticks += 1;

        let motion = bomber::advance(self);
        report.motion = Some(motion);
        if motion == Motion::Crashed {
            return report;
        }

        if self.bullet.is_some() {
            report.gun = gun::advance(self);
        }
        if self.bomb.is_some() {
            report.bomb = bomb::advance(self);
        }

        report
    }

    pub(crate) fn crash(&mut self, reason: CrashReason) {
        self.status = RoundStatus::Crashed(reason);
    }

    pub(crate) fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

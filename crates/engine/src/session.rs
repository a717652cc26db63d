//! Session module - the game-state machine around one world
//!
//! A session owns the current [`World`], the level counter, the selected
//! block and the random source used for level generation. It moves between
//! three phases:
//!
//! ```text
//! Playing --all ore collected--> Victory  --2s--> Playing (level + 1)
//! Playing --fell / lava-------> GameOver --2s--> Playing (level 1)
//! ```
//!
//! The 2 second display delay is a countdown advanced by [`Session::tick`],
//! so the frame loop keeps polling input (and can quit) while an overlay is
//! shown.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use tui_miner_core::{MineOutcome, StepOutcome, Walk, World};
use tui_miner_types::{
    AimDirection8, AimMode, FacingDirection4, MinerAction, Tile, DEFAULT_SELECTED_SLOT,
    PHASE_DISPLAY_MS, PLACEABLE,
};

use crate::events::{DeathCause, GameEvent, EVENT_CAPACITY};
use crate::snapshot::{GameSnapshot, PlayerSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    /// Level complete overlay, counting down to the next level
    Victory { remaining_ms: u32 },
    /// Game over overlay with the score frozen at the moment of death
    GameOver { remaining_ms: u32, score: u32 },
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::Victory { .. } => "victory",
            Phase::GameOver { .. } => "game_over",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    world: World,
    level: u32,
    phase: Phase,
    selected: usize,
    aim_mode: AimMode,
    /// Cursor position in grid units, once the pointer has been seen
    cursor: Option<(f32, f32)>,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
    rng: StdRng,
}

impl Session {
    /// Start a session at `level` with an OS-seeded generator.
    pub fn new(level: u32) -> Self {
        Self::with_rng(level, StdRng::from_os_rng())
    }

    /// Start a session with an explicit generator (tests, benchmarks).
    pub fn with_rng(level: u32, mut rng: StdRng) -> Self {
        let level = level.max(1);
        let world = World::generate(level, &mut rng);
        let mut session = Self {
            world,
            level,
            phase: Phase::Playing,
            selected: DEFAULT_SELECTED_SLOT,
            aim_mode: AimMode::default(),
            cursor: None,
            events: ArrayVec::new(),
            rng,
        };
        session.announce_level();
        session
    }

    pub fn with_aim_mode(mut self, aim_mode: AimMode) -> Self {
        self.aim_mode = aim_mode;
        self
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_tile(&self) -> Tile {
        PLACEABLE[self.selected]
    }

    /// Live score, or the frozen one while the game over overlay is up
    pub fn score(&self) -> u32 {
        match self.phase {
            Phase::GameOver { score, .. } => score,
            _ => self.world.score(),
        }
    }

    /// Update the pointer position (grid units). `None` forgets it.
    pub fn set_cursor(&mut self, cursor: Option<(f32, f32)>) {
        self.cursor = cursor;
    }

    /// Cursor minus player centre, when the cursor is known
    pub fn aim_vector(&self) -> Option<(f32, f32)> {
        let (cx, cy) = self.cursor?;
        let (px, py) = self.world.player().center();
        Some((cx - px, cy - py))
    }

    /// Direction used by mine and place. Without a cursor the player's
    /// facing is used.
    pub fn aim_direction(&self) -> AimDirection8 {
        match self.aim_vector() {
            Some((dx, dy)) => self.aim_mode.direction(dx, dy),
            None => self.world.player().facing.into(),
        }
    }

    /// Apply a player action. Ignored outside the Playing phase.
    ///
    /// Returns true if the action changed anything.
    pub fn apply_action(&mut self, action: MinerAction) -> bool {
        if !self.is_playing() {
            debug!(action = action.as_str(), phase = self.phase.as_str(), "action ignored");
            return false;
        }

        match action {
            MinerAction::MoveLeft => {
                self.world.walk(Walk::Left);
                true
            }
            MinerAction::MoveRight => {
                self.world.walk(Walk::Right);
                true
            }
            MinerAction::StopMove => {
                self.world.walk(Walk::Stop);
                true
            }
            MinerAction::Jump => {
                let aim = self.aim_vector();
                self.world.jump(aim)
            }
            MinerAction::Select(slot) => {
                if slot < PLACEABLE.len() {
                    self.selected = slot;
                    true
                } else {
                    false
                }
            }
            MinerAction::Mine => self.mine(),
            MinerAction::Place => self.place(),
        }
    }

    fn mine(&mut self) -> bool {
        let dir = self.aim_direction();
        match self.world.mine(dir) {
            MineOutcome::Nothing => false,
            MineOutcome::Mined { tile, x, y } => {
                debug!(tile = tile.as_str(), x, y, "mined");
                self.push_event(GameEvent::Mined { tile, x, y });
                true
            }
            MineOutcome::HitLava { x, y } => {
                debug!(x, y, "mined into lava");
                self.game_over(DeathCause::MinedLava);
                true
            }
        }
    }

    fn place(&mut self) -> bool {
        let dir = self.aim_direction();
        let tile = self.selected_tile();
        match self.world.place(dir, tile) {
            Ok((x, y)) => {
                self.push_event(GameEvent::Placed { tile, x, y });
                true
            }
            Err(err) => {
                debug!(code = err.code(), tile = tile.as_str(), "place rejected: {}", err.message());
                false
            }
        }
    }

    /// Advance the session by `elapsed_ms`.
    ///
    /// While playing this runs one physics step and the win/loss checks;
    /// during an overlay it only counts down.
    pub fn tick(&mut self, elapsed_ms: u32) {
        match self.phase {
            Phase::Playing => self.tick_playing(elapsed_ms),
            Phase::Victory { remaining_ms } => {
                let remaining_ms = remaining_ms.saturating_sub(elapsed_ms);
                if remaining_ms == 0 {
                    self.level = self.level.saturating_add(1);
                    self.start_level();
                } else {
                    self.phase = Phase::Victory { remaining_ms };
                }
            }
            Phase::GameOver {
                remaining_ms,
                score,
            } => {
                let remaining_ms = remaining_ms.saturating_sub(elapsed_ms);
                if remaining_ms == 0 {
                    self.level = 1;
                    self.start_level();
                } else {
                    self.phase = Phase::GameOver {
                        remaining_ms,
                        score,
                    };
                }
            }
        }
    }

    fn tick_playing(&mut self, elapsed_ms: u32) {
        if let Some((dx, dy)) = self.aim_vector() {
            let facing = FacingDirection4::from(self.aim_mode.direction(dx, dy));
            self.world.player_mut().facing = facing;
        }

        let outcome = self.world.step();
        if outcome.is_fatal() {
            let (x, y) = self.world.player().tile();
            debug!(outcome = outcome.as_str(), x, y, "fatal step");
        }
        match outcome {
            StepOutcome::Moved => {}
            StepOutcome::FellOut => {
                self.game_over(DeathCause::FellOut);
                return;
            }
            StepOutcome::TouchedLava => {
                self.game_over(DeathCause::TouchedLava);
                return;
            }
        }

        self.world.player_mut().advance_animation(elapsed_ms);

        if self.world.victory_reached() {
            let score = self.world.score();
            info!(level = self.level, score, "level complete");
            self.push_event(GameEvent::Victory {
                level: self.level,
                score,
            });
            self.phase = Phase::Victory {
                remaining_ms: PHASE_DISPLAY_MS,
            };
        }
    }

    fn game_over(&mut self, cause: DeathCause) {
        let score = self.world.score();
        info!(level = self.level, score, cause = cause.as_str(), "game over");
        self.push_event(GameEvent::GameOver {
            level: self.level,
            score,
            cause,
        });
        self.phase = Phase::GameOver {
            remaining_ms: PHASE_DISPLAY_MS,
            score,
        };
    }

    fn start_level(&mut self) {
        debug!(from = self.phase.as_str(), level = self.level, "overlay finished");
        self.world = World::generate(self.level, &mut self.rng);
        self.phase = Phase::Playing;
        self.announce_level();
    }

    fn announce_level(&mut self) {
        let ore = self.world.ore_totals();
        info!(
            level = self.level,
            diamonds = ore.diamond,
            emeralds = ore.emerald,
            "level started"
        );
        self.push_event(GameEvent::LevelStarted {
            level: self.level,
            ore,
        });
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.try_push(event).is_err() {
            debug!(event = event.as_str(), "event queue full, dropping");
        }
    }

    /// Drain the queued events, oldest first.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.world.grid().to_rows();
        let player = self.world.player();
        out.player = PlayerSnapshot {
            x: player.x,
            y: player.y,
            pose: player.pose(),
        };
        out.inventory = self.world.inventory().counts();
        out.selected = self.selected;
        out.level = self.level;
        out.score = self.score();
        out.ore_totals = self.world.ore_totals();
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

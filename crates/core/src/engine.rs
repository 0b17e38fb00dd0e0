//! Engine module - drives the game one tick at a time
//!
//! Each call to [`GameEngine::tick`] runs the same fixed sequence:
//!
//! 1. rebuild the grid from the locked cells
//! 2. advance the fall timer and, when it expires, drop the piece one row
//! 3. apply player intents in arrival order
//! 4. paint the active piece onto the grid
//! 5. lock the piece if it landed, clear rows, update score/level/speed
//! 6. end the game if anything is locked in the spawn row
//!
//! Once the game is over only `Restart` (and `Quit`) are honored.

use tracing::{debug, info, trace};

use crate::grid::{Grid, LockedPositions};
use crate::line_clear::clear_full_rows;
use crate::piece::{ActivePiece, FallOutcome, NextPiece, PieceController};
use crate::rng::PieceRandomizer;
use crate::scoring::{fall_speed_for_level, level_for_score, line_clear_points};
use crate::snapshot::GameSnapshot;
use crate::types::{Intent, INITIAL_FALL_SPEED_SECS};

/// Where the engine is in its lock cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Active piece is under player control
    Falling,
    /// Piece landed this tick and will lock at the end of it
    Locking,
    /// Waiting for a restart
    GameOver,
}

/// Score and speed counters for one game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSession {
    pub score: u32,
    pub level: u32,
    /// Seconds per automatic drop
    pub fall_speed: f64,
    /// Seconds accumulated toward the next automatic drop
    pub fall_timer: f64,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            fall_speed: INITIAL_FALL_SPEED_SECS,
            fall_timer: 0.0,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Gravity found the piece resting on something
    pub landed: bool,
    /// Rows removed by this tick's lock
    pub lines_cleared: u32,
    pub leveled_up: bool,
    /// The game ended during this tick
    pub game_over: bool,
    pub restarted: bool,
    /// A `Quit` intent was received
    pub quit: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    locked: LockedPositions,
    grid: Grid,
    controller: PieceController,
    next: NextPiece,
    randomizer: PieceRandomizer,
    session: GameSession,
    phase: Phase,
    quit_requested: bool,
}

impl GameEngine {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut randomizer = PieceRandomizer::new(seed);
        let first = randomizer.draw();
        let next = randomizer.draw();

        let mut engine = Self {
            locked: LockedPositions::new(),
            grid: Grid::new(),
            controller: PieceController::new(ActivePiece::from(first)),
            next,
            randomizer,
            session: GameSession::new(),
            phase: Phase::Falling,
            quit_requested: false,
        };
        engine.refresh_grid();
        engine
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn level(&self) -> u32 {
        self.session.level
    }

    pub fn fall_speed(&self) -> f64 {
        self.session.fall_speed
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    pub fn active(&self) -> &ActivePiece {
        self.controller.active()
    }

    pub fn next_piece(&self) -> NextPiece {
        self.next
    }

    pub fn locked_positions(&self) -> &LockedPositions {
        &self.locked
    }

    /// Grid as of the end of the last tick, active piece included
    ///
    /// On a tick that locks a piece this is the board drawn just before the
    /// lock: cleared rows still show and the promoted piece does not. The next
    /// tick rebuilds it from the locked cells.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.next = self.next;
        out.score = self.session.score;
        out.level = self.session.level;
        out.fall_speed = self.session.fall_speed;
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the game by `delta_secs` and apply `intents` in order
    ///
    /// Negative or NaN deltas count as zero.
    pub fn tick(&mut self, delta_secs: f64, intents: &[Intent]) -> TickReport {
        let mut report = TickReport::default();

        if self.phase == Phase::GameOver {
            self.apply_game_over_intents(intents, &mut report);
            return report;
        }

        self.grid = Grid::build(&self.locked);

        self.session.fall_timer += delta_secs.max(0.0);
        if self.session.fall_timer >= self.session.fall_speed {
            self.session.fall_timer = 0.0;
            match self.controller.auto_fall(&self.locked) {
                FallOutcome::Moved => trace!(y = self.controller.active().y, "auto fall"),
                FallOutcome::Landed => {
                    self.phase = Phase::Locking;
                    report.landed = true;
                }
                FallOutcome::Blocked => {}
            }
        }

        for &intent in intents {
            self.apply_intent(intent, &mut report);
        }

        self.paint_active();

        if self.phase == Phase::Locking {
            self.lock_active(&mut report);
        }

        if self.locked.row_has_any(0) {
            self.phase = Phase::GameOver;
            report.game_over = true;
            info!(score = self.session.score, level = self.session.level, "game over");
        }

        report
    }

    fn apply_intent(&mut self, intent: Intent, report: &mut TickReport) {
        match intent {
            Intent::MoveLeft => {
                self.controller.move_left(&self.locked);
            }
            Intent::MoveRight => {
                self.controller.move_right(&self.locked);
            }
            Intent::SoftDrop => {
                self.controller.soft_drop(&self.locked);
            }
            Intent::Rotate => {
                self.controller.rotate(&self.locked);
            }
            Intent::Quit => {
                self.quit_requested = true;
                report.quit = true;
            }
            // Only meaningful once the game is over.
            Intent::Restart => {}
        }
    }

    fn apply_game_over_intents(&mut self, intents: &[Intent], report: &mut TickReport) {
        for &intent in intents {
            match intent {
                Intent::Restart if self.phase == Phase::GameOver => {
                    self.restart();
                    report.restarted = true;
                }
                Intent::Quit => {
                    self.quit_requested = true;
                    report.quit = true;
                }
                _ => {}
            }
        }
    }

    /// Commit the active piece, promote the preview and clear rows
    fn lock_active(&mut self, report: &mut TickReport) {
        let promoted = ActivePiece::from(self.next);
        let landed = self.controller.replace(promoted);
        for (x, y) in landed.cells() {
            self.locked.insert(x, y, landed.color);
        }
        self.next = self.randomizer.draw();

        let cleared = clear_full_rows(&mut self.locked);
        self.session.score = self
            .session
            .score
            .saturating_add(line_clear_points(cleared));

        if cleared > 0 {
            let level = level_for_score(self.session.score);
            if level != self.session.level {
                report.leveled_up = true;
                info!(level, score = self.session.score, "level up");
            }
            self.session.level = level;
            self.session.fall_speed = fall_speed_for_level(level);
        }

        debug!(
            kind = ?landed.kind,
            x = landed.x,
            y = landed.y,
            cleared,
            next = ?self.next.kind,
            "piece locked"
        );

        report.lines_cleared = cleared as u32;
        self.phase = Phase::Falling;
    }

    fn restart(&mut self) {
        self.locked.clear();
        self.session = GameSession::new();
        self.controller.recenter();
        self.phase = Phase::Falling;
        self.refresh_grid();
        info!(seed = self.seed(), "restart");
    }

    fn paint_active(&mut self) {
        let active = self.controller.active();
        for (x, y) in active.cells() {
            if y >= 0 {
                self.grid.paint(x, y, active.color);
            }
        }
    }

    fn refresh_grid(&mut self) {
        self.grid = Grid::build(&self.locked);
        self.paint_active();
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}

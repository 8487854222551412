//! Game loop - the state machine and timing authority.
//!
//! One owner for all mutable state: board, falling piece, score, timers.
//! Commands and ticks are serialized onto this single control flow; hosts
//! that receive input asynchronously queue it and drain it on their own
//! turn. Gravity is time-accumulation based, so behavior is independent of
//! the host refresh rate.
//!
//! Boundary and overlap violations are indistinguishable here: every
//! fallible low-level check collapses into the boolean collision contract,
//! and a rejected move simply leaves the piece untouched.

use crate::board::{Board, ClearedRows};
use crate::catalog;
use crate::piece::{self, FallingPiece};
use crate::rng::SimpleRng;
use crate::scoring::{line_clear_score, next_fall_interval, DOWN_MOVE_SCORE};
use crate::snapshot::{RenderSnapshot, StatusSnapshot};
use crate::types::{
    Cell, Command, LockEvent, SessionSignal, BASE_FALL_INTERVAL_MS, LINE_CLEAR_PAUSE_MS,
};

/// Session lifecycle phases.
///
/// `GameOver` is terminal; only `Reset` leaves it, re-entering `Running`
/// through a fresh spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<FallingPiece>,
    rng: SimpleRng,
    phase: Phase,
    score: u32,
    lines_cleared: u32,
    fall_interval_ms: u32,
    /// Elapsed time accumulated toward the next automatic drop.
    fall_timer_ms: u32,
    /// Remaining flash window; while non-zero, marked rows await compaction.
    clear_timer_ms: u32,
    pending_clear: ClearedRows,
    /// Last lock event, consumed once by observers.
    last_lock: Option<LockEvent>,
    /// One-shot game-over notification.
    game_over_event: bool,
    /// The spawn placement that collided, overlaid on the final frame.
    clash: Option<FallingPiece>,
}

impl Game {
    /// Fresh session in `Idle` with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng: SimpleRng::new(seed),
            phase: Phase::Idle,
            score: 0,
            lines_cleared: 0,
            fall_interval_ms: BASE_FALL_INTERVAL_MS,
            fall_timer_ms: 0,
            clear_timer_ms: 0,
            pending_clear: ClearedRows::new(),
            last_lock: None,
            game_over_event: false,
            clash: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&FallingPiece> {
        self.active.as_ref()
    }

    /// Apply a session signal.
    ///
    /// Signals arrive synchronously at this single control point; there is
    /// no ambient broadcast between components.
    pub fn handle_signal(&mut self, signal: SessionSignal) {
        match signal {
            SessionSignal::Start => match self.phase {
                Phase::Idle => {
                    self.phase = Phase::Running;
                    self.spawn_next();
                }
                Phase::Paused => self.phase = Phase::Running,
                Phase::Running | Phase::GameOver => {}
            },
            SessionSignal::Pause => match self.phase {
                Phase::Running => self.phase = Phase::Paused,
                Phase::Paused => self.phase = Phase::Running,
                Phase::Idle | Phase::GameOver => {}
            },
            SessionSignal::Reset => {
                // Discard the session, keep the RNG rolling so restarts do
                // not replay the identical piece sequence.
                let seed = self.rng.state();
                *self = Self::new(seed);
                self.phase = Phase::Running;
                self.spawn_next();
            }
        }
    }

    /// Apply a player command, validated against the board before commit.
    ///
    /// Returns whether the piece changed. Commands received while not
    /// running, or during the line-clear pause, are ignored rather than
    /// treated as errors.
    pub fn handle_command(&mut self, command: Command) -> bool {
        if self.phase != Phase::Running || self.clear_timer_ms > 0 {
            return false;
        }
        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::Rotate => self.try_rotate(),
            Command::SoftDrop => self.drop_one(),
        }
    }

    /// Advance the game by `elapsed_ms` of real time.
    pub fn tick(&mut self, mut elapsed_ms: u32) {
        if self.phase != Phase::Running {
            return;
        }

        // The flash window pauses gravity; compaction and the next spawn
        // happen when it runs out. Time past the window's end belongs to
        // the freshly spawned piece, so it falls through to gravity.
        if self.clear_timer_ms > 0 {
            if elapsed_ms < self.clear_timer_ms {
                self.clear_timer_ms -= elapsed_ms;
                return;
            }
            elapsed_ms -= self.clear_timer_ms;
            self.clear_timer_ms = 0;
            self.finish_clear();
            if self.phase != Phase::Running {
                return;
            }
        }

        if self.active.is_none() {
            return;
        }

        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms >= self.fall_interval_ms {
            self.fall_timer_ms = 0;
            self.drop_one();
        }
    }

    /// Take the one-shot game-over notification, if pending.
    pub fn take_game_over_event(&mut self) -> bool {
        std::mem::take(&mut self.game_over_event)
    }

    /// Take and clear the last lock event.
    pub fn take_lock_event(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    /// Fill `out` with the renderable union of settled and falling cells.
    ///
    /// The board itself is never mutated by snapshotting; the falling piece
    /// (and, on the final frame, the blocked spawn placement) is overlaid
    /// here only.
    pub fn render_snapshot_into(&self, out: &mut RenderSnapshot) {
        for (i, &cell) in self.board.cells().iter().enumerate() {
            let w = self.board.width() as usize;
            out.cells[i / w][i % w] = cell;
        }

        if let Some(piece) = &self.active {
            let cell = Cell::Piece(piece.kind);
            for (x, y) in piece.cells() {
                if self.board.is_in_bounds(x, y) {
                    out.cells[y as usize][x as usize] = cell;
                }
            }
        }

        if self.phase == Phase::GameOver {
            if let Some(clash) = &self.clash {
                for (x, y) in clash.cells() {
                    if self.board.is_in_bounds(x, y) {
                        out.cells[y as usize][x as usize] = Cell::SpawnClash;
                    }
                }
            }
        }
    }

    pub fn render_snapshot(&self) -> RenderSnapshot {
        let mut out = RenderSnapshot::default();
        self.render_snapshot_into(&mut out);
        out
    }

    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            score: self.score,
            lines_cleared: self.lines_cleared,
            is_game_over: self.phase == Phase::GameOver,
            is_paused: self.phase == Phase::Paused,
        }
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        if piece::collides(&self.board, &piece.mask, piece.x + dx, piece.y + dy) {
            return false;
        }
        self.active = Some(FallingPiece {
            x: piece.x + dx,
            y: piece.y + dy,
            ..piece
        });
        true
    }

    fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        match piece::try_rotate(&self.board, &piece) {
            Some((mask, x)) => {
                self.active = Some(FallingPiece { mask, x, ..piece });
                true
            }
            None => false,
        }
    }

    /// One down-move, shared by gravity and the soft-drop command.
    ///
    /// An accepted move scores a point; a rejected one is the lock trigger.
    fn drop_one(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        if self.try_move(0, 1) {
            self.score += DOWN_MOVE_SCORE;
            return true;
        }
        self.lock_active();
        false
    }

    /// Merge the piece at its last valid position, then run the scorer.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.board.merge(&piece.cells(), Cell::Piece(piece.kind));

        let full = self.board.full_rows();
        if full.is_empty() {
            self.last_lock = Some(LockEvent {
                lines_cleared: 0,
                line_clear_score: 0,
            });
            self.spawn_next();
            return;
        }

        debug_assert!(full.len() <= crate::board::MAX_CLEARED_ROWS);
        let bonus = line_clear_score(full.len());
        self.score += bonus;
        self.lines_cleared += full.len() as u32;
        self.fall_interval_ms = next_fall_interval(self.fall_interval_ms);
        self.last_lock = Some(LockEvent {
            lines_cleared: full.len() as u32,
            line_clear_score: bonus,
        });

        // Flash the full rows; compaction happens when the window elapses.
        self.board.mark_rows(&full);
        self.pending_clear = full;
        self.clear_timer_ms = LINE_CLEAR_PAUSE_MS;
    }

    fn finish_clear(&mut self) {
        let rows = std::mem::take(&mut self.pending_clear);
        self.board.compact_rows(&rows);
        self.spawn_next();
    }

    /// Spawn a replacement piece; a colliding spawn placement ends the game.
    fn spawn_next(&mut self) {
        let piece = catalog::spawn(&mut self.rng);
        if piece::collides(&self.board, &piece.mask, piece.x, piece.y) {
            self.phase = Phase::GameOver;
            self.game_over_event = true;
            self.clash = Some(piece);
            self.active = None;
            return;
        }
        self.active = Some(piece);
        self.fall_timer_ms = 0;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

//! Game module - the piece-lifecycle state machine.
//!
//! `Game` owns one matrix, one active piece, the hold slot, the bag, the
//! scoring state, and the fall controller, and mutates them synchronously in
//! response to discrete [`Command`]s. The lifecycle is spawn, fall, lock,
//! clear, respawn; a piece that cannot move down locks immediately (no lock
//! delay). A spawn that collides with the stack ends the game; it is reported
//! as [`GameEvent::GameOver`], never as a crash.

use std::time::{Duration, Instant};

use marathon_types::{Command, PieceKind, MATRIX_HEIGHT};

use crate::bag::Bag;
use crate::error::EngineError;
use crate::fall::Fall;
use crate::matrix::Matrix;
use crate::scoring::Scoring;
use crate::tetrimino::Tetrimino;

/// Outcome of handling one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Input had no effect: a stale tick, a rejected move or rotation, a
    /// second hold in one cycle, or any command after game over.
    Ignored,
    /// The active piece moved or rotated, the hold slot changed, or the fall
    /// rate was toggled.
    Moved,
    /// The active piece locked in place; `lines` rows were cleared.
    Locked { lines: u32 },
    /// A replacement piece could not spawn; the game has ended.
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Game {
    matrix: Matrix,
    current: Tetrimino,
    held: Option<PieceKind>,
    can_hold: bool,
    bag: Bag,
    scoring: Scoring,
    fall: Fall,
    started_at: Instant,
    final_elapsed: Option<Duration>,
    game_over: bool,
}

impl Game {
    /// Start a marathon game at `start_level` with a seeded piece supply.
    pub fn new(start_level: u32, seed: u64) -> Result<Self, EngineError> {
        Self::with_bag(start_level, Bag::new(seed))
    }

    /// Start a game over an existing bag (deterministic supply for tests).
    pub fn with_bag(start_level: u32, mut bag: Bag) -> Result<Self, EngineError> {
        let mut matrix = Matrix::new();
        let current = Tetrimino::spawn(bag.next());
        matrix.add_piece(&current)?;

        Ok(Self {
            matrix,
            current,
            held: None,
            can_hold: true,
            bag,
            scoring: Scoring::new(start_level),
            fall: Fall::new(start_level),
            started_at: Instant::now(),
            final_elapsed: None,
            game_over: false,
        })
    }

    /// Handle one discrete command.
    ///
    /// Returns `Ok` for every normal outcome, including rejected inputs and
    /// the game-over transition. An `Err` means an engine invariant was
    /// violated and indicates a logic bug, not a game condition.
    pub fn handle(&mut self, command: Command) -> Result<GameEvent, EngineError> {
        if self.game_over {
            return Ok(GameEvent::Ignored);
        }

        match command {
            Command::MoveLeft => self.moved(|game| game.current.move_left(&mut game.matrix)),
            Command::MoveRight => self.moved(|game| game.current.move_right(&mut game.matrix)),
            Command::RotateCw => self.moved(|game| game.current.rotate(&mut game.matrix, true)),
            Command::RotateCcw => self.moved(|game| game.current.rotate(&mut game.matrix, false)),
            Command::SoftDropToggle => {
                self.fall.toggle_soft_drop();
                Ok(GameEvent::Moved)
            }
            Command::HardDrop => self.hard_drop(),
            Command::Hold => self.hold(),
            Command::FallTick { timer_id } => {
                if !self.fall.accepts(timer_id) {
                    return Ok(GameEvent::Ignored);
                }
                let event = self.lower()?;
                if event == GameEvent::Moved && self.fall.is_accelerated() {
                    self.scoring.add_drop_points(1, false);
                }
                Ok(event)
            }
        }
    }

    fn moved(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<bool, EngineError>,
    ) -> Result<GameEvent, EngineError> {
        Ok(if op(self)? {
            GameEvent::Moved
        } else {
            GameEvent::Ignored
        })
    }

    /// One fall step: advance the piece, or lock it and respawn.
    fn lower(&mut self) -> Result<GameEvent, EngineError> {
        if self.current.can_move_down(&self.matrix) {
            self.current.move_down(&mut self.matrix)?;
            return Ok(GameEvent::Moved);
        }

        // Lock: the piece stays stamped; scan and clear the rows it spans.
        let lines = self.matrix.clear_completed_rows(&self.current) as u32;
        self.scoring.process_action(lines as usize);
        self.fall.set_level(self.scoring.level());
        self.can_hold = true;

        match self.spawn_next() {
            Ok(()) => Ok(GameEvent::Locked { lines }),
            Err(_) => Ok(self.end_game()),
        }
    }

    /// Collapse all remaining fall steps into one synchronous burst.
    fn hard_drop(&mut self) -> Result<GameEvent, EngineError> {
        let mut cells: u32 = 0;
        for _ in 0..=MATRIX_HEIGHT {
            match self.lower()? {
                GameEvent::Moved => cells += 1,
                event => {
                    self.scoring.add_drop_points(cells, true);
                    return Ok(event);
                }
            }
        }
        // A piece can descend at most the matrix height before resting.
        Err(EngineError::PlacementConflict {
            x: self.current.x,
            y: self.current.y,
        })
    }

    /// Bank the active piece and activate the held one (or the next from the
    /// bag). At most once per lock cycle.
    fn hold(&mut self) -> Result<GameEvent, EngineError> {
        if !self.can_hold {
            return Ok(GameEvent::Ignored);
        }

        self.matrix.remove_piece(&self.current);
        let outgoing = self.current.kind;
        let incoming = match self.held.take() {
            Some(kind) => kind,
            None => self.bag.next(),
        };
        self.held = Some(outgoing);

        let piece = Tetrimino::spawn(incoming);
        match self.matrix.add_piece(&piece) {
            Ok(()) => {
                self.current = piece;
                self.can_hold = false;
                Ok(GameEvent::Moved)
            }
            Err(_) => Ok(self.end_game()),
        }
    }

    fn spawn_next(&mut self) -> Result<(), EngineError> {
        let piece = Tetrimino::spawn(self.bag.next());
        self.matrix.add_piece(&piece)?;
        self.current = piece;
        Ok(())
    }

    fn end_game(&mut self) -> GameEvent {
        self.game_over = true;
        self.final_elapsed = Some(self.started_at.elapsed());
        GameEvent::GameOver
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn current(&self) -> &Tetrimino {
        &self.current
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.held
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn preview(&self) -> arrayvec::ArrayVec<PieceKind, { marathon_types::PREVIEW_LEN }> {
        self.bag.preview()
    }

    pub fn score(&self) -> u32 {
        self.scoring.total()
    }

    pub fn level(&self) -> u32 {
        self.scoring.level()
    }

    pub fn lines(&self) -> u32 {
        self.scoring.lines()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.fall.is_accelerated()
    }

    /// Interval until the next fall tick the outer loop should schedule.
    pub fn fall_interval(&self) -> Duration {
        self.fall.interval()
    }

    /// Identity the next `FallTick` must carry to be accepted.
    pub fn timer_id(&self) -> u32 {
        self.fall.timer_id()
    }

    /// Wall-clock time since construction, frozen at game over.
    pub fn elapsed(&self) -> Duration {
        self.final_elapsed
            .unwrap_or_else(|| self.started_at.elapsed())
    }

    #[cfg(test)]
    pub(crate) fn matrix_mut(&mut self) -> &mut Matrix {
        &mut self.matrix
    }
}

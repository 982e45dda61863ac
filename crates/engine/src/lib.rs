//! Marathon game engine - pure, deterministic, and testable
//!
//! This crate owns all the game rules: the playing-field matrix, piece
//! geometry and collision, line clearing, scoring, the bag randomizer, and
//! the fall/lock state machine. It has no dependencies on UI or I/O.
//!
//! # Module Structure
//!
//! - [`matrix`]: 10x22 grid (2 hidden spawn rows) with collision detection and line clearing
//! - [`tetrimino`]: active piece movement and rotation, validated against the matrix
//! - [`pieces`]: shape tables per kind and orientation, plus the spawn transform
//! - [`bag`]: 7-bag randomizer with a read-only preview
//! - [`scoring`]: classic line-clear scoring and level progression
//! - [`fall`]: level-derived fall interval, soft-drop acceleration, timer identity
//! - [`game`]: piece-lifecycle orchestration (spawn, lock, clear, hold, respawn)
//!
//! # Example
//!
//! ```
//! use marathon_engine::{Game, GameEvent};
//! use marathon_types::Command;
//!
//! let mut game = Game::new(0, 12345).unwrap();
//! game.handle(Command::MoveRight).unwrap();
//! let event = game.handle(Command::HardDrop).unwrap();
//! assert!(matches!(event, GameEvent::Locked { .. } | GameEvent::GameOver));
//! ```
//!
//! All engine mutation happens synchronously in response to a [`Command`];
//! there are no background workers. The surrounding loop drives gravity by
//! delivering `Command::FallTick` at the interval the engine reports.
//!
//! [`Command`]: marathon_types::Command

pub mod bag;
pub mod error;
pub mod fall;
pub mod game;
pub mod matrix;
pub mod pieces;
pub mod scoring;
pub mod tetrimino;

pub use bag::Bag;
pub use error::EngineError;
pub use fall::Fall;
pub use game::{Game, GameEvent};
pub use matrix::Matrix;
pub use scoring::Scoring;
pub use tetrimino::Tetrimino;

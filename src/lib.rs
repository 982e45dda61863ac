//! Marathon Tetris (workspace facade crate).
//!
//! This package exposes the member crates under stable module names; the
//! implementation lives in dedicated crates under `crates/`.

pub use marathon_engine as engine;
pub use marathon_input as input;
pub use marathon_term as term;
pub use marathon_types as types;

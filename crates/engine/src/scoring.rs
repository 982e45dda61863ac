//! Scoring module - classic line-clear scoring and level progression.
//!
//! Points for a lock come from the classic table (40/100/300/1200) scaled by
//! `level + 1`; drops add 1 point per cell soft-dropped and 2 per cell
//! hard-dropped. The level is derived from cumulative lines on top of the
//! externally set starting level, so totals and level never decrease.

use marathon_types::{LINES_PER_LEVEL, LINE_SCORES};

/// Points for clearing `lines` rows in a single lock at `level`.
pub fn line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines] * (level + 1)
}

/// Points for dropped cells: soft drop 1 per cell, hard drop 2 per cell.
pub fn drop_score(cells: u32, hard: bool) -> u32 {
    if hard {
        cells * 2
    } else {
        cells
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoring {
    start_level: u32,
    level: u32,
    total: u32,
    lines: u32,
}

impl Scoring {
    /// Seed the starting level and zero totals.
    pub fn new(start_level: u32) -> Self {
        Self {
            start_level,
            level: start_level,
            total: 0,
            lines: 0,
        }
    }

    /// Apply the result of a completed lock: add the clear points for the
    /// current level, bump cumulative lines, and recompute the level.
    pub fn process_action(&mut self, lines: usize) {
        self.total = self.total.saturating_add(line_score(lines, self.level));
        self.lines = self.lines.saturating_add(lines as u32);
        self.level = self.start_level + self.lines / LINES_PER_LEVEL;
    }

    /// Add points for cells descended by a drop.
    pub fn add_drop_points(&mut self, cells: u32, hard: bool) {
        self.total = self.total.saturating_add(drop_score(cells, hard));
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }
}

//! Bag module - 7-bag piece supply.
//!
//! Pieces are produced in shuffled batches of the full piece set, so between
//! two occurrences of the same kind at most 13 other pieces can appear. The
//! shuffle is a uniform Fisher-Yates permutation driven by a ChaCha8 generator
//! owned by the bag and seeded once at construction, which makes the whole
//! supply deterministic for a given seed.

use std::collections::VecDeque;

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use marathon_types::{PieceKind, PREVIEW_LEN};

#[derive(Debug, Clone)]
pub struct Bag {
    queue: VecDeque<PieceKind>,
    rng: ChaCha8Rng,
}

impl Bag {
    /// Create a bag seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        let mut bag = Self {
            queue: VecDeque::with_capacity(2 * PieceKind::ALL.len()),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        bag.top_up();
        bag
    }

    /// Create a bag whose first draws are `head`, in order, before random
    /// supply resumes. Deterministic piece supply for tests.
    pub fn from_pieces(head: &[PieceKind], seed: u64) -> Self {
        let mut bag = Self {
            queue: head.iter().copied().collect(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        bag.top_up();
        bag
    }

    /// Append one full shuffled permutation of all kinds.
    fn refill(&mut self) {
        let mut batch = PieceKind::ALL;
        batch.shuffle(&mut self.rng);
        self.queue.extend(batch);
    }

    /// Keep enough queued pieces that the preview window is always full.
    fn top_up(&mut self) {
        while self.queue.len() <= PREVIEW_LEN {
            self.refill();
        }
    }

    /// Pop the next piece. The queue is refilled with whole bags, never
    /// partial ones, so the fairness bound holds across refills.
    pub fn next(&mut self) -> PieceKind {
        let kind = self
            .queue
            .pop_front()
            .expect("bag queue is kept non-empty by top_up");
        self.top_up();
        kind
    }

    /// The next few queued pieces, front first. Read-only; does not advance
    /// the queue.
    pub fn preview(&self) -> ArrayVec<PieceKind, PREVIEW_LEN> {
        self.queue.iter().take(PREVIEW_LEN).copied().collect()
    }
}

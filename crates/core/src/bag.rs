//! Piece bag - deterministic 7-bag piece source for game loops
//!
//! Each bag holds every piece kind once in shuffled order; a new bag is shuffled when
//! the current one runs out. Shuffling uses a small LCG so a seed replays exactly.

use crate::types::PieceKind;

/// Linear congruential generator (Numerical Recipes constants)
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        // A zero state would only ever produce the increment sequence
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Value in `[0, max)`
    pub fn below(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

#[derive(Debug, Clone)]
pub struct PieceBag {
    bag: [PieceKind; PieceKind::COUNT],
    next: usize,
    rng: Lcg,
}

impl PieceBag {
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: PieceKind::ALL,
            next: 0,
            rng: Lcg::new(seed),
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        // Fisher-Yates
        for i in (1..self.bag.len()).rev() {
            let j = self.rng.below(i as u32 + 1) as usize;
            self.bag.swap(i, j);
        }
        self.next = 0;
    }

    /// Take the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        if self.next == self.bag.len() {
            self.refill();
        }
        let kind = self.bag[self.next];
        self.next += 1;
        kind
    }
}

impl Iterator for PieceBag {
    type Item = PieceKind;

    fn next(&mut self) -> Option<PieceKind> {
        Some(self.draw())
    }
}

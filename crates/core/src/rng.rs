//! RNG module - uniform piece and color selection
//!
//! Every draw picks a shape kind and a color independently and uniformly; there
//! is no bag or history. A seeded LCG keeps games reproducible in tests.

use crate::piece::NextPiece;
use crate::types::{PieceColor, ShapeKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick one element uniformly
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_range(items.len() as u32) as usize]
    }
}

/// Draws upcoming pieces
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: SimpleRng,
    seed: u32,
}

impl PieceRandomizer {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Seed this randomizer was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn next_kind(&mut self) -> ShapeKind {
        self.rng.choose(&ShapeKind::ALL)
    }

    pub fn next_color(&mut self) -> PieceColor {
        self.rng.choose(&PieceColor::ALL)
    }

    /// Pick the next piece: kind first, then color
    pub fn draw(&mut self) -> NextPiece {
        let kind = self.next_kind();
        let color = self.next_color();
        NextPiece { kind, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_every_kind_and_color_appears() {
        let mut r = PieceRandomizer::new(12345);
        let mut kinds = [false; 7];
        let mut colors = [false; 7];
        for _ in 0..500 {
            let p = r.draw();
            kinds[ShapeKind::ALL.iter().position(|&k| k == p.kind).unwrap()] = true;
            colors[PieceColor::ALL.iter().position(|&c| c == p.color).unwrap()] = true;
        }
        assert!(kinds.iter().all(|&seen| seen));
        assert!(colors.iter().all(|&seen| seen));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceRandomizer::new(99);
        let mut b = PieceRandomizer::new(99);
        for _ in 0..50 {
            assert_eq!(a.draw(), b.draw());
        }
    }
}

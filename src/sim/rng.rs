//! Random source for serves
//!
//! The simulation never reaches for a global RNG; callers hand in a
//! `ServeRandom` so tests can pin the serve angle exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform source of values in `[0, 1)`
pub trait ServeRandom {
    fn next_unit(&mut self) -> f32;
}

impl ServeRandom for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seeded production RNG
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Vertical serve speed, uniform in `[-range, range]`
pub fn serve_dy<R: ServeRandom + ?Sized>(rng: &mut R, range: f32) -> f32 {
    rng.next_unit() * 2.0 * range - range
}

/// `+1.0` or `-1.0` with equal probability
pub fn coin_flip<R: ServeRandom + ?Sized>(rng: &mut R) -> f32 {
    if rng.next_unit() > 0.5 { 1.0 } else { -1.0 }
}

/// Always returns the same value. Useful for pinning serves in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f32);

impl ServeRandom for FixedRandom {
    fn next_unit(&mut self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_dy_bounds() {
        assert_eq!(serve_dy(&mut FixedRandom(0.0), 2.0), -2.0);
        assert_eq!(serve_dy(&mut FixedRandom(0.5), 2.0), 0.0);
        assert!((serve_dy(&mut FixedRandom(0.999), 2.0) - 1.996).abs() < 1e-4);
    }

    #[test]
    fn test_coin_flip() {
        assert_eq!(coin_flip(&mut FixedRandom(0.9)), 1.0);
        assert_eq!(coin_flip(&mut FixedRandom(0.1)), -1.0);
    }

    #[test]
    fn test_pcg_in_unit_range_and_deterministic() {
        let mut a = seeded(7);
        let mut b = seeded(7);
        for _ in 0..1000 {
            let x = a.next_unit();
            assert!((0.0..1.0).contains(&x));
            assert_eq!(x, b.next_unit());
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Injectable random source for simulated latency and failures
//!
//! Handlers draw from a shared, seedable generator instead of a thread-local
//! one so tests can pin the outcome of every draw.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: Arc<Mutex<StdRng>>,
}

impl RandomSource {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is set, entropy otherwise
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Uniform float in `[low, high]`
    pub fn uniform(&self, low: f64, high: f64) -> f64 {
        self.draw(|rng| rng.gen_range(low..=high))
    }

    /// Uniform integer in `[low, high]`
    pub fn int(&self, low: u32, high: u32) -> u32 {
        self.draw(|rng| rng.gen_range(low..=high))
    }

    /// `true` with probability `p`, clamped to `[0, 1]`
    pub fn chance(&self, p: f64) -> bool {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self.draw(|rng| rng.gen_bool(p))
    }

    fn draw<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sources_are_deterministic() {
        let a = RandomSource::seeded(42);
        let b = RandomSource::seeded(42);

        for _ in 0..16 {
            assert_eq!(a.int(1, 100), b.int(1, 100));
            assert_eq!(a.uniform(0.5, 2.0).to_bits(), b.uniform(0.5, 2.0).to_bits());
            assert_eq!(a.chance(0.1), b.chance(0.1));
        }
    }

    #[test]
    fn test_draws_stay_in_range() {
        let rng = RandomSource::seeded(7);
        for _ in 0..1000 {
            let v = rng.uniform(0.01, 0.1);
            assert!((0.01..=0.1).contains(&v));
            let n = rng.int(1, 100);
            assert!((1..=100).contains(&n));
        }
    }

    #[test]
    fn test_chance_extremes() {
        let rng = RandomSource::seeded(1);
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
            assert!(!rng.chance(-3.0));
            assert!(rng.chance(7.0));
            assert!(!rng.chance(f64::NAN));
        }
    }

    #[test]
    fn test_clones_share_the_generator() {
        let a = RandomSource::seeded(9);
        let b = a.clone();
        let reference = RandomSource::seeded(9);

        assert_eq!(a.int(1, 1_000_000), reference.int(1, 1_000_000));
        assert_eq!(b.int(1, 1_000_000), reference.int(1, 1_000_000));
    }
}

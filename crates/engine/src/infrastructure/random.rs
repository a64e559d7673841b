//! Random number implementations.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infrastructure::ports::RandomPort;

fn in_range<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.gen_range(min..max)
}

fn unbounded<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(0..i32::MAX)
}

fn below<R: Rng + ?Sized>(rng: &mut R, bound: i32) -> i32 {
    if bound <= 0 {
        return 0;
    }
    rng.gen_range(0..bound)
}

fn fraction<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>()
}

/// System random - uses the thread-local OS-seeded generator.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    /// # Panics
    /// Panics if `min >= max`.
    fn next_in_range(&self, min: i32, max: i32) -> i32 {
        in_range(&mut rand::thread_rng(), min, max)
    }

    fn next_unbounded(&self) -> i32 {
        unbounded(&mut rand::thread_rng())
    }

    fn next_below(&self, bound: i32) -> i32 {
        below(&mut rand::thread_rng(), bound)
    }

    fn next_fraction(&self) -> f64 {
        fraction(&mut rand::thread_rng())
    }
}

/// Seeded random - reproducible sequence for demos and debugging.
///
/// Shared across requests, so the generator sits behind a mutex.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic mid-draw cannot leave StdRng in an invalid state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl RandomPort for SeededRandom {
    /// # Panics
    /// Panics if `min >= max`.
    fn next_in_range(&self, min: i32, max: i32) -> i32 {
        self.with_rng(|rng| in_range(rng, min, max))
    }

    fn next_unbounded(&self) -> i32 {
        self.with_rng(unbounded)
    }

    fn next_below(&self, bound: i32) -> i32 {
        self.with_rng(|rng| below(rng, bound))
    }

    fn next_fraction(&self) -> f64 {
        self.with_rng(fraction)
    }
}

/// Fixed random for testing.
#[cfg(test)]
pub struct FixedRandom(pub i32);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn next_in_range(&self, _min: i32, _max: i32) -> i32 {
        self.0
    }

    fn next_unbounded(&self) -> i32 {
        self.0
    }

    fn next_below(&self, _bound: i32) -> i32 {
        self.0
    }

    fn next_fraction(&self) -> f64 {
        0.0
    }
}

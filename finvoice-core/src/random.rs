//! Injectable randomness for the sentiment draw and advice templates.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of independent random draws, shareable across threads
pub trait RandomSource: Send + Sync {
    /// Uniform float in `[low, high]`
    fn uniform(&self, low: f64, high: f64) -> f64;

    /// Uniform integer in `[low, high]`
    fn int_inclusive(&self, low: i64, high: i64) -> i64;

    /// Uniform index into a collection of `len` items (0 when empty)
    fn index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.int_inclusive(0, len as i64 - 1) as usize
    }
}

/// Draws from the calling thread's RNG on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }

    fn int_inclusive(&self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Reproducible draws from a seeded generator
#[derive(Debug)]
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
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut *rng)
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.with_rng(|rng| rng.gen_range(low..=high))
    }

    fn int_inclusive(&self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        self.with_rng(|rng| rng.gen_range(low..=high))
    }
}

/// Always returns the same values; for tests that assert exact tiers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom {
    value: f64,
    integer: Option<i64>,
}

impl FixedRandom {
    /// `uniform` returns `value` unchanged; integer draws return the low end.
    pub fn new(value: f64) -> Self {
        Self { value, integer: None }
    }

    /// Integer draws return `integer`, clamped into the requested range.
    pub fn with_integer(mut self, integer: i64) -> Self {
        self.integer = Some(integer);
        self
    }
}

impl RandomSource for FixedRandom {
    fn uniform(&self, _low: f64, _high: f64) -> f64 {
        self.value
    }

    fn int_inclusive(&self, low: i64, high: i64) -> i64 {
        match self.integer {
            Some(n) if low <= high => n.clamp(low, high),
            _ => low,
        }
    }
}

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const JITTER_MIN: f64 = 0.01;
pub const JITTER_MAX: f64 = 0.04;

pub trait Jitter {
    fn draw(&mut self) -> f64;
}

/// Uniform draw over `[JITTER_MIN, JITTER_MAX]`.
#[derive(Debug, Clone)]
pub struct UniformJitter {
    rng: ChaCha8Rng,
}

impl UniformJitter {
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Jitter for the `index`-th drug of a panel. Seeded panels derive one
    /// stream per drug so results do not depend on evaluation order.
    pub fn for_panel(seed: Option<u64>, index: usize) -> Self {
        match seed {
            Some(s) => Self::seeded(s.wrapping_add(index as u64)),
            None => Self::from_entropy(),
        }
    }
}

impl Jitter for UniformJitter {
    fn draw(&mut self) -> f64 {
        self.rng.gen_range(JITTER_MIN..=JITTER_MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(f64);

impl FixedJitter {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, JITTER_MAX))
    }

    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Jitter for FixedJitter {
    fn draw(&mut self) -> f64 {
        self.0
    }
}

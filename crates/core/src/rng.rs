use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform draws consumed by the grid generator.
pub trait RandomSource {
    /// Integer in `[0, bound)`. `bound` is never zero.
    fn next_below(&mut self, bound: u32) -> u32;

    /// Float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for RngState {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.rng.gen_range(0..bound)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

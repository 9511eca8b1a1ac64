use rand::Rng;

/// Source of the uniform draws used to place mines.
///
/// Every [`rand::Rng`] qualifies. Implement it by hand to script exact
/// mine layouts.
pub trait MineRng {
    /// Uniform integer in `[0, n)`. Only called with `n > 0`.
    fn below(&mut self, n: usize) -> usize;
}

impl<R: Rng> MineRng for R {
    fn below(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

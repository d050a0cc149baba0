use rand::Rng;

/// Source of the two kinds of randomness the game needs.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn int_in_range(&mut self, low: u32, high: u32) -> u32;

    /// Uniform draw in `[0, 1)`.
    fn chance(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn int_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }

    fn chance(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Knobs for a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainerConfig {
    /// Seeds the trainer's rng, which deals every root.
    pub seed: u64,
    /// Walk straight through nodes with a single legal action without
    /// creating an information set for them.
    pub skip_forced: bool,
    /// Roots per player per iteration in batched training.
    pub batch: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            skip_forced: false,
            batch: 1,
        }
    }
}

impl TrainerConfig {
    pub fn seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }
    pub fn skip_forced(self, skip_forced: bool) -> Self {
        Self {
            skip_forced,
            ..self
        }
    }
    pub fn batch(self, batch: usize) -> Self {
        Self { batch, ..self }
    }
}

use super::edge::EuchreEdge;
use super::rollout::determinize;
use super::state::EuchreState;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::SmallRng;
use trick_cfr::*;
use trick_core::*;

/// Determinized copies of one decision, dealt back as chance roots.
///
/// Every world agrees with what the actor can see, so the actor's key
/// is the same at each root while the other seats' keys vary.
#[derive(Debug, Clone)]
pub struct Worlds(Vec<EuchreState>);

impl Worlds {
    pub fn sample(state: &EuchreState, n: usize, rng: &mut SmallRng) -> Result<Self, CfrError> {
        if n == 0 {
            return Err(CfrError::InvalidState("resolving needs at least one world".into()));
        }
        (0..n)
            .map(|_| determinize(state, rng))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
}

impl CfrGame for Worlds {
    type E = EuchreEdge;
    type S = EuchreState;
    fn players(&self) -> usize {
        SEATS
    }
    fn root<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> EuchreState {
        self.0[rng.random_range(0..self.0.len())].clone()
    }
}

/// Solves each decision from scratch and samples the averaged strategy.
///
/// Nothing carries over between decisions. The cost grows with the tree
/// left below the decision, so full five-card hands are only tractable
/// late in the play.
#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    worlds: usize,
    iterations: usize,
}

impl Resolver {
    pub fn new(worlds: usize, iterations: usize) -> Self {
        Self { worlds, iterations }
    }
    /// Trains a fresh table over worlds sampled from the actor's view.
    pub fn solve(&self, state: &EuchreState, rng: &mut SmallRng) -> Result<Trainer<Worlds>, CfrError> {
        let worlds = Worlds::sample(state, self.worlds, rng)?;
        let config = TrainerConfig::default().seed(rng.random()).skip_forced(true);
        let mut trainer = Trainer::new(worlds, config);
        trainer.train(self.iterations)?;
        log::debug!(
            "resolved over {} worlds into {} information sets",
            trainer.game().size(),
            trainer.infosets().len()
        );
        Ok(trainer)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(RESOLVER_WORLDS, RESOLVER_ITERATIONS)
    }
}

impl Agent<EuchreState> for Resolver {
    fn act(&mut self, state: &EuchreState, rng: &mut SmallRng) -> Result<EuchreEdge, CfrError> {
        let choices = state.choices();
        if let [only] = choices[..] {
            return Ok(only);
        }
        let trainer = self.solve(state, rng)?;
        let ref key = state.key()?;
        let weights = trainer
            .infoset(key)
            .filter(|info| info.matches(&choices))
            .map(|info| {
                choices
                    .iter()
                    .map(|c| info.averaged(c))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        match weights.and_then(|w| WeightedIndex::new(w).ok()) {
            Some(distribution) => Ok(choices[distribution.sample(rng)]),
            None => Uniform.act(state, rng),
        }
    }
}

use super::edge::EuchreEdge;
use super::rollout;
use super::state::EuchreState;
use rand::rngs::SmallRng;
use trick_cfr::*;
use trick_core::*;

/// Plays whichever action scores best by random rollouts.
#[derive(Debug, Clone, Copy)]
pub struct Rollout {
    samples: usize,
}

impl Rollout {
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }
}

impl Default for Rollout {
    fn default() -> Self {
        Self::new(ROLLOUT_SAMPLES)
    }
}

impl Agent<EuchreState> for Rollout {
    fn act(&mut self, state: &EuchreState, rng: &mut SmallRng) -> Result<EuchreEdge, CfrError> {
        if let [only] = state.choices()[..] {
            return Ok(only);
        }
        rollout::score(state, self.samples, rng)?
            .into_iter()
            .inspect(|(_, u)| debug_assert!(!u.is_nan()))
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(edge, _)| edge)
            .ok_or_else(|| CfrError::InvalidState("no legal actions to score".into()))
    }
}

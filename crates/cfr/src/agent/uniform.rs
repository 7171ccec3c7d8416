use crate::*;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use trick_core::CfrError;

/// Plays a uniformly random legal action.
#[derive(Debug, Default, Clone, Copy)]
pub struct Uniform;

impl<S> Agent<S> for Uniform
where
    S: CfrState,
{
    fn act(&mut self, state: &S, rng: &mut SmallRng) -> Result<S::E, CfrError> {
        state
            .choices()
            .choose(rng)
            .copied()
            .ok_or_else(|| CfrError::InvalidState("no legal actions to choose from".into()))
    }
}

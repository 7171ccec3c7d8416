use crate::*;
use rand::rngs::SmallRng;
use trick_core::CfrError;

/// Anything that picks an action at a decision node.
pub trait Agent<S>
where
    S: CfrState,
{
    fn act(&mut self, state: &S, rng: &mut SmallRng) -> Result<S::E, CfrError>;
}

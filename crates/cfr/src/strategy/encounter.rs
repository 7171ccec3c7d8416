use trick_core::*;

/// Accumulated CFR data for one info-action pair.
///
/// - `regret`: cumulative counterfactual regret for not taking this action
/// - `weight`: cumulative reach-weighted strategy mass (normalize to average)
/// - `policy`: current regret-matched probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Encounter {
    pub regret: Utility,
    pub weight: Probability,
    pub policy: Probability,
}

impl Encounter {
    /// Fresh accumulators with the given starting probability.
    pub fn new(policy: Probability) -> Self {
        Self {
            regret: 0.,
            weight: 0.,
            policy,
        }
    }
}

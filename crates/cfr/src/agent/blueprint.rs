use crate::*;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::SmallRng;
use std::collections::HashMap;
use trick_core::*;

/// Samples actions from a trained average strategy.
///
/// Keys the trainer never reached, or whose strategy carries no mass,
/// fall back to uniform play over the current legal actions.
#[derive(Debug, Clone)]
pub struct Blueprint<E>
where
    E: CfrEdge,
{
    strategies: HashMap<String, Vec<(E, Probability)>>,
}

impl<E> Blueprint<E>
where
    E: CfrEdge,
{
    pub fn size(&self) -> usize {
        self.strategies.len()
    }
}

impl<G> From<&Trainer<G>> for Blueprint<G::E>
where
    G: CfrGame,
{
    fn from(trainer: &Trainer<G>) -> Self {
        Self {
            strategies: trainer
                .infosets()
                .iter()
                .map(|(key, info)| (key.clone(), info.average()))
                .collect(),
        }
    }
}

impl<S> Agent<S> for Blueprint<S::E>
where
    S: CfrState,
{
    fn act(&mut self, state: &S, rng: &mut SmallRng) -> Result<S::E, CfrError> {
        let choices = state.choices();
        if choices.len() == 1 {
            return Ok(choices[0]);
        }
        let key = state.key()?;
        let weights = self
            .strategies
            .get(&key)
            .filter(|policy| policy.len() == choices.len())
            .map(|policy| {
                choices
                    .iter()
                    .map(|c| {
                        policy
                            .iter()
                            .find(|(e, _)| e == c)
                            .map(|(_, p)| *p)
                            .unwrap_or_default()
                    })
                    .collect::<Vec<_>>()
            });
        match weights.and_then(|w| WeightedIndex::new(w).ok()) {
            Some(distribution) => Ok(choices[distribution.sample(rng)]),
            None => Uniform.act(state, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn plays_trained_pure_strategy() {
        let mut trainer = Trainer::new(Kuhn, TrainerConfig::default().seed(2));
        trainer.train(2000).unwrap();
        let mut blueprint = Blueprint::from(&trainer);
        assert_eq!(blueprint.size(), trainer.infosets().len());
        let ref mut rng = SmallRng::seed_from_u64(0);
        let ref facing = KuhnState::from(([0, 2], vec![KuhnEdge::Bet]));
        let calls = (0..200)
            .filter(|_| blueprint.act(facing, rng).unwrap() == KuhnEdge::Bet)
            .count();
        assert!(calls > 180, "king called {} of 200 bets", calls);
    }

    #[test]
    fn unseen_keys_play_uniformly() {
        let mut blueprint = Blueprint::<KuhnEdge> {
            strategies: HashMap::new(),
        };
        let ref mut rng = SmallRng::seed_from_u64(0);
        let ref root = KuhnState::from(([0, 1], vec![]));
        let action = blueprint.act(root, rng).unwrap();
        assert!(root.choices().contains(&action));
    }
}

use crate::*;
use std::collections::BTreeSet;
use trick_core::*;

/// Batched training: many trees walked against a frozen table, then merged.
///
/// Roots are dealt sequentially from the trainer's rng, so the batch is a
/// pure function of the seed. Each walk only reads the table and records
/// its deltas per key; merging happens in root order and then every touched
/// key gets one regret-matching update. Walks are independent, which is what
/// lets them run in parallel under the `server` feature.
impl<G> Trainer<G>
where
    G: CfrGame,
{
    /// Runs `iterations` batched rounds. Returns the mean per iteration of
    /// the summed root values, with each batch averaged over its roots so
    /// the scale matches [`Trainer::train`].
    pub fn train_batched(&mut self, iterations: usize) -> Result<Utility, CfrError> {
        let mut total = 0.;
        let mut done = 0;
        for _ in 0..iterations {
            total += self.step_batched()? / self.config.batch.max(1) as Utility;
            done += 1;
            if let Some(line) = self.metrics.checkpoint() {
                log::info!("{}", line);
            }
            if trick_core::interrupted() {
                log::warn!("training interrupted after {} iterations", self.epochs);
                break;
            }
        }
        let mean = match done {
            0 => 0.,
            n => total / n as Utility,
        };
        log::info!(
            "trained {} batched iterations, {} information sets, mean utility {:+.4}",
            self.epochs,
            self.infosets.len(),
            mean
        );
        Ok(mean)
    }

    /// One batched iteration: `batch` roots per player, merged per player.
    pub fn step_batched(&mut self) -> Result<Utility, CfrError> {
        let mut total = 0.;
        for walker in 0..self.game.players() {
            let roots = (0..self.config.batch.max(1))
                .map(|_| self.game.root(&mut self.rng))
                .collect::<Vec<_>>();
            for (value, deltas) in self.batch(walker, &roots)? {
                total += value;
                self.merge(deltas)?;
            }
            self.refresh()?;
        }
        self.epochs += 1;
        self.metrics.inc_epoch();
        Ok(total)
    }

    /// Walk every root against the frozen table.
    #[cfg(feature = "server")]
    pub fn batch(
        &self,
        walker: Position,
        roots: &[G::S],
    ) -> Result<Vec<(Utility, Counterfactuals<G::E>)>, CfrError> {
        use rayon::iter::IntoParallelRefIterator;
        use rayon::iter::ParallelIterator;
        roots
            .par_iter()
            .map(|root| self.tree(walker, root))
            .collect()
    }
    #[cfg(not(feature = "server"))]
    pub fn batch(
        &self,
        walker: Position,
        roots: &[G::S],
    ) -> Result<Vec<(Utility, Counterfactuals<G::E>)>, CfrError> {
        roots.iter().map(|root| self.tree(walker, root)).collect()
    }

    /// Full walk of one tree for `walker`, returning its value and deltas.
    pub fn tree(
        &self,
        walker: Position,
        root: &G::S,
    ) -> Result<(Utility, Counterfactuals<G::E>), CfrError> {
        let ref reach = vec![1.; self.game.players()];
        let mut deltas = Counterfactuals::new();
        let value = self.walk(walker, root, reach, &mut deltas)?;
        Ok((value, deltas))
    }

    /// Read-only counterpart of [`Trainer::cfr`]. Unvisited keys play uniformly.
    fn walk(
        &self,
        walker: Position,
        state: &G::S,
        reach: &[Probability],
        deltas: &mut Counterfactuals<G::E>,
    ) -> Result<Utility, CfrError> {
        Self::check(self.game.players(), walker, reach)?;
        self.metrics.add_nodes(1);
        let actor = match state.turn() {
            Turn::Terminal => return state.payoff(walker),
            Turn::Choice(actor) => actor,
        };
        let choices = state.choices();
        if self.config.skip_forced && choices.len() == 1 {
            let ref child = state.apply(&choices[0])?;
            return self.walk(walker, child, reach, deltas);
        }
        let key = state.key()?;
        let policy = self.frozen(&key, &choices)?;
        let values = choices
            .iter()
            .zip(policy.iter())
            .map(|(edge, p)| {
                let ref child = state.apply(edge)?;
                let ref reach = Self::scaled(reach, actor, *p);
                self.walk(walker, child, reach, deltas)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let value = policy
            .iter()
            .zip(values.iter())
            .map(|(p, v)| p * v)
            .sum::<Utility>();
        if actor == walker {
            let counterfactual = Self::external(reach, walker);
            let delta = deltas
                .entry(key)
                .or_insert_with(|| Counterfactual::new(&choices));
            for ((edge, p), v) in choices.iter().zip(policy.iter()).zip(values.iter()) {
                delta.add(edge, counterfactual * (v - value), reach[walker] * p);
            }
        }
        Ok(value)
    }

    /// Current strategy at a key without creating it.
    fn frozen(&self, key: &str, choices: &[G::E]) -> Result<Vec<Probability>, CfrError> {
        match self.infosets.get(key) {
            None => Ok(vec![1. / choices.len() as Probability; choices.len()]),
            Some(info) if info.matches(choices) => choices.iter().map(|e| info.iterated(e)).collect(),
            Some(_) => Err(CfrError::InvalidState(format!(
                "key {} offered a different action set {:?}",
                key, choices
            ))),
        }
    }

    /// Folds one tree's deltas into the table, creating keys as needed.
    fn merge(&mut self, deltas: Counterfactuals<G::E>) -> Result<(), CfrError> {
        for (key, delta) in deltas {
            let info = self.resolve(&key, &delta.choices)?;
            for (edge, regret) in delta.regret.iter() {
                let weight = delta.weight.get(edge).copied().unwrap_or_default();
                info.accumulate(edge, *regret, weight)?;
            }
            self.pending.insert(key);
        }
        Ok(())
    }

    /// One regret-matching update per key touched since the last refresh.
    fn refresh(&mut self) -> Result<(), CfrError> {
        let touched = std::mem::take(&mut self.pending);
        self.metrics.add_infos(touched.len());
        for key in touched.iter() {
            self.infosets
                .get_mut(key)
                .ok_or_else(|| CfrError::InvalidState(format!("lost information set {}", key)))?
                .update();
        }
        Ok(())
    }
}

/// Keys merged but not yet re-matched.
pub type Pending = BTreeSet<String>;

#[cfg(test)]
mod tests {
    use super::*;

    fn trainer(seed: u64, batch: usize) -> Trainer<Kuhn> {
        Trainer::new(Kuhn, TrainerConfig::default().seed(seed).batch(batch))
    }

    #[test]
    fn batched_is_deterministic() {
        let mut a = trainer(5, 8);
        let mut b = trainer(5, 8);
        assert_eq!(a.train_batched(50).unwrap(), b.train_batched(50).unwrap());
        assert_eq!(a.infosets(), b.infosets());
    }

    #[test]
    fn batched_strategies_stay_normalized() {
        let mut trainer = trainer(3, 4);
        trainer.train_batched(100).unwrap();
        assert!(!trainer.infosets().is_empty());
        for info in trainer.infosets().values() {
            let mass = info.policy().iter().map(|(_, p)| p).sum::<Probability>();
            assert!((mass - 1.).abs() < PROBABILITY_EPSILON);
        }
    }

    #[test]
    fn batched_converges_on_kuhn() {
        let mut trainer = trainer(1, 16);
        trainer.train_batched(2000).unwrap();
        let call = trainer.averaged("K:b", &KuhnEdge::Bet).unwrap();
        assert!(call > 0.95, "king calls a bet {}", call);
    }
}

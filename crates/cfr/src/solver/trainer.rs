use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use trick_core::*;

/// Vanilla CFR over any [`CfrGame`].
///
/// The trainer owns the information-set table for its whole lifetime: it is
/// created empty with the trainer, grows monotonically as new keys are
/// visited, and is never shared with another trainer. Every legal action of
/// every visited node is explored each iteration; only the walker's own
/// information sets receive regret updates during its traversal.
pub struct Trainer<G>
where
    G: CfrGame,
{
    pub(super) game: G,
    pub(super) config: TrainerConfig,
    pub(super) rng: SmallRng,
    pub(super) infosets: HashMap<String, InfoSet<G::E>>,
    pub(super) pending: Pending,
    pub(super) epochs: usize,
    pub(super) metrics: Metrics,
}

impl<G> Trainer<G>
where
    G: CfrGame,
{
    pub fn new(game: G, config: TrainerConfig) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(config.seed),
            infosets: HashMap::new(),
            pending: Pending::new(),
            epochs: 0,
            metrics: Metrics::default(),
            config,
            game,
        }
    }
    pub fn game(&self) -> &G {
        &self.game
    }
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
    /// Completed training iterations.
    pub fn epochs(&self) -> usize {
        self.epochs
    }
    pub fn infosets(&self) -> &HashMap<String, InfoSet<G::E>> {
        &self.infosets
    }
    pub fn infoset(&self, key: &str) -> Option<&InfoSet<G::E>> {
        self.infosets.get(key)
    }
    /// Average strategy probability of an action at a trained key.
    pub fn averaged(&self, key: &str, edge: &G::E) -> Result<Probability, CfrError> {
        self.infosets
            .get(key)
            .ok_or_else(|| CfrError::InvalidState(format!("no information set for key {}", key)))?
            .averaged(edge)
    }

    /// Runs `iterations` rounds, each walking a fresh root once per player.
    /// Returns the mean per iteration of the walkers' summed root values,
    /// a diagnostic only. Stops early at an iteration boundary when
    /// interrupted, averaging over the iterations actually run.
    pub fn train(&mut self, iterations: usize) -> Result<Utility, CfrError> {
        let mut total = 0.;
        let mut done = 0;
        for _ in 0..iterations {
            total += self.step()?;
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
            "trained {} iterations, {} information sets, mean utility {:+.4}",
            self.epochs,
            self.infosets.len(),
            mean
        );
        Ok(mean)
    }

    /// One iteration: a fresh root and a full walk for every player.
    /// Returns the summed utility of those walks.
    pub fn step(&mut self) -> Result<Utility, CfrError> {
        let players = self.game.players();
        let mut total = 0.;
        for walker in 0..players {
            let ref root = self.game.root(&mut self.rng);
            let ref reach = vec![1.; players];
            total += self.cfr(walker, root, reach)?;
        }
        self.epochs += 1;
        self.metrics.inc_epoch();
        log::debug!("epoch {} utility {:+.4}", self.epochs, total);
        Ok(total)
    }

    /// Counterfactual value of `state` for `walker`, updating the walker's
    /// information sets along the way.
    ///
    /// `reach[i]` is the probability that player `i`'s own choices lead to
    /// `state` under the current strategy profile.
    pub fn cfr(
        &mut self,
        walker: Position,
        state: &G::S,
        reach: &[Probability],
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
            return self.cfr(walker, child, reach);
        }
        let key = state.key()?;
        let policy = {
            let info = self.resolve(&key, &choices)?;
            choices
                .iter()
                .map(|e| info.iterated(e))
                .collect::<Result<Vec<_>, _>>()?
        };
        let values = choices
            .iter()
            .zip(policy.iter())
            .map(|(edge, p)| {
                let ref child = state.apply(edge)?;
                let ref reach = Self::scaled(reach, actor, *p);
                self.cfr(walker, child, reach)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let value = policy
            .iter()
            .zip(values.iter())
            .map(|(p, v)| p * v)
            .inspect(|v| debug_assert!(!v.is_nan()))
            .sum::<Utility>();
        if actor == walker {
            let counterfactual = Self::external(reach, walker);
            let info = self
                .infosets
                .get_mut(&key)
                .ok_or_else(|| CfrError::InvalidState(format!("lost information set {}", key)))?;
            for ((edge, p), v) in choices.iter().zip(policy.iter()).zip(values.iter()) {
                info.accumulate(edge, counterfactual * (v - value), reach[walker] * p)?;
            }
            info.update();
            self.metrics.add_infos(1);
        }
        Ok(value)
    }

    /// Read-or-create, enforcing that a key always offers one action set.
    pub(super) fn resolve(
        &mut self,
        key: &str,
        choices: &[G::E],
    ) -> Result<&mut InfoSet<G::E>, CfrError> {
        match self.infosets.entry(key.to_string()) {
            Entry::Occupied(entry) if entry.get().matches(choices) => Ok(entry.into_mut()),
            Entry::Occupied(entry) => Err(CfrError::InvalidState(format!(
                "key {} offered {:?} but was created with {:?}",
                key,
                choices,
                entry.get().choices().collect::<Vec<_>>()
            ))),
            Entry::Vacant(entry) => Ok(entry.insert(InfoSet::new(choices)?)),
        }
    }

    pub(super) fn check(
        players: usize,
        walker: Position,
        reach: &[Probability],
    ) -> Result<(), CfrError> {
        match (walker < players, reach.len() == players) {
            (true, true) => Ok(()),
            _ => Err(CfrError::InvalidState(format!(
                "walker {} with {} reach probabilities in a {} player game",
                walker,
                reach.len(),
                players
            ))),
        }
    }
    /// Reach vector with the actor's slot scaled by the action probability.
    pub(super) fn scaled(reach: &[Probability], actor: Position, p: Probability) -> Vec<Probability> {
        reach
            .iter()
            .enumerate()
            .map(|(i, r)| if i == actor { r * p } else { *r })
            .collect()
    }
    /// Product of every reach probability except the walker's own.
    pub(super) fn external(reach: &[Probability], walker: Position) -> Probability {
        reach
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != walker)
            .map(|(_, r)| *r)
            .product()
    }
}

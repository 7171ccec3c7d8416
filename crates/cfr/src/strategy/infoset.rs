use crate::*;
use std::collections::BTreeMap;
use trick_core::*;

/// Regret and strategy accumulators for one canonical key.
///
/// Created lazily on the first visit to a key, with the legal actions of
/// that visit. Every later visit must offer the same action set; the three
/// per-action quantities always share one key set.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoSet<E>
where
    E: CfrEdge,
{
    encounters: BTreeMap<E, Encounter>,
    visits: usize,
}

impl<E> InfoSet<E>
where
    E: CfrEdge,
{
    /// Zero regret, zero strategy mass, uniform current strategy.
    pub fn new(choices: &[E]) -> Result<Self, CfrError> {
        let uniform = 1. / choices.len() as Probability;
        let encounters = choices
            .iter()
            .map(|e| (*e, Encounter::new(uniform)))
            .collect::<BTreeMap<_, _>>();
        match (choices.len(), encounters.len()) {
            (0, _) => Err(CfrError::InvalidState(
                "information set created with no legal actions".into(),
            )),
            (n, m) if n != m => Err(CfrError::InvalidState(format!(
                "information set created with duplicate actions {:?}",
                choices
            ))),
            _ => Ok(Self {
                encounters,
                visits: 0,
            }),
        }
    }
    /// Number of actions.
    pub fn size(&self) -> usize {
        self.encounters.len()
    }
    /// Number of regret updates applied.
    pub fn visits(&self) -> usize {
        self.visits
    }
    /// Actions in edge order.
    pub fn choices(&self) -> impl Iterator<Item = E> + '_ {
        self.encounters.keys().copied()
    }
    /// Whether a visit's legal actions agree with this information set.
    pub fn matches(&self, choices: &[E]) -> bool {
        choices.len() == self.size() && choices.iter().all(|e| self.encounters.contains_key(e))
    }
    pub fn encounter(&self, edge: &E) -> Result<&Encounter, CfrError> {
        self.encounters
            .get(edge)
            .ok_or_else(|| CfrError::UnknownAction(format!("{}", edge)))
    }
    /// Current regret-matched probability of an action.
    pub fn iterated(&self, edge: &E) -> Result<Probability, CfrError> {
        self.encounter(edge).map(|e| e.policy)
    }
    /// Average strategy: the approximate equilibrium CFR actually outputs.
    /// Uniform before any strategy mass has accumulated.
    pub fn averaged(&self, edge: &E) -> Result<Probability, CfrError> {
        let weight = self.encounter(edge)?.weight;
        let total = self.encounters.values().map(|e| e.weight).sum::<Probability>();
        match total > 0. {
            true => Ok(weight / total),
            false => Ok(1. / self.size() as Probability),
        }
    }
    pub fn regret(&self, edge: &E) -> Result<Utility, CfrError> {
        self.encounter(edge).map(|e| e.regret)
    }
    pub fn weight(&self, edge: &E) -> Result<Probability, CfrError> {
        self.encounter(edge).map(|e| e.weight)
    }
    /// Current strategy over every action.
    pub fn policy(&self) -> Vec<(E, Probability)> {
        self.encounters.iter().map(|(e, x)| (*e, x.policy)).collect()
    }
    /// Average strategy over every action.
    pub fn average(&self) -> Vec<(E, Probability)> {
        self.choices()
            .map(|e| (e, self.averaged(&e).unwrap_or_default()))
            .collect()
    }
    /// Adds one visit's regret and strategy-mass deltas for an action.
    pub fn accumulate(
        &mut self,
        edge: &E,
        regret: Utility,
        weight: Probability,
    ) -> Result<(), CfrError> {
        let encounter = self
            .encounters
            .get_mut(edge)
            .ok_or_else(|| CfrError::UnknownAction(format!("{}", edge)))?;
        encounter.regret += regret;
        encounter.weight += weight;
        Ok(())
    }
    /// Regret matching: probabilities proportional to positive regret,
    /// uniform over the full action set when no regret is positive.
    pub fn update(&mut self) {
        let n = self.size() as Probability;
        let normalization = self
            .encounters
            .values()
            .map(|e| e.regret.max(0.))
            .inspect(|r| debug_assert!(!r.is_nan()))
            .sum::<Utility>();
        for encounter in self.encounters.values_mut() {
            encounter.policy = match normalization > 0. {
                true => encounter.regret.max(0.) / normalization,
                false => 1. / n,
            };
        }
        self.visits += 1;
    }
}

impl<E> std::fmt::Display for InfoSet<E>
where
    E: CfrEdge,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (edge, encounter) in self.encounters.iter() {
            writeln!(
                f,
                "{:>12} {:>+10.4} {:>10.4} {:>8.4} {:>8.4}",
                format!("{}", edge),
                encounter.regret,
                encounter.weight,
                encounter.policy,
                self.averaged(edge).unwrap_or_default(),
            )?;
        }
        Ok(())
    }
}

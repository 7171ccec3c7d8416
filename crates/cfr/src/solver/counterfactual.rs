use crate::*;
use std::collections::BTreeMap;
use trick_core::*;

/// Regret and strategy-mass deltas for one key, gathered by a read-only
/// tree walk and merged into the table afterwards.
///
/// `choices` records the legal actions observed so a key first reached in a
/// batch can be created with the same action set.
#[derive(Debug, Clone, PartialEq)]
pub struct Counterfactual<E>
where
    E: CfrEdge,
{
    pub choices: Vec<E>,
    pub regret: BTreeMap<E, Utility>,
    pub weight: BTreeMap<E, Probability>,
}

impl<E> Counterfactual<E>
where
    E: CfrEdge,
{
    pub fn new(choices: &[E]) -> Self {
        Self {
            choices: choices.to_vec(),
            regret: choices.iter().map(|e| (*e, 0.)).collect(),
            weight: choices.iter().map(|e| (*e, 0.)).collect(),
        }
    }
    pub fn add(&mut self, edge: &E, regret: Utility, weight: Probability) {
        *self.regret.entry(*edge).or_default() += regret;
        *self.weight.entry(*edge).or_default() += weight;
    }
}

/// Deltas from one tree walk, keyed canonically so merge order is fixed.
pub type Counterfactuals<E> = BTreeMap<String, Counterfactual<E>>;

use super::*;
use crate::*;
use rand::seq::SliceRandom;

/// Three-card Kuhn poker, the smallest game with real bluffing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Kuhn;

impl CfrGame for Kuhn {
    type E = KuhnEdge;
    type S = KuhnState;
    fn players(&self) -> usize {
        2
    }
    fn root<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> KuhnState {
        let mut deck = [0u8, 1, 2];
        deck.shuffle(rng);
        KuhnState::from(([deck[0], deck[1]], vec![]))
    }
}

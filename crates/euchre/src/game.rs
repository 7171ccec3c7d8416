use super::config::EuchreConfig;
use super::edge::EuchreEdge;
use super::state::EuchreState;
use trick_cards::*;
use trick_cfr::*;
use trick_core::*;

/// Deals random hands of Euchre.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euchre {
    config: EuchreConfig,
}

impl Euchre {
    pub fn new(config: EuchreConfig) -> Self {
        Self { config }
    }
    pub fn config(&self) -> &EuchreConfig {
        &self.config
    }
}

impl CfrGame for Euchre {
    type E = EuchreEdge;
    type S = EuchreState;

    fn players(&self) -> usize {
        SEATS
    }

    /// Shuffles, deals `hand_size` cards to each seat and turns up the next
    /// card. The dealer is chosen at random; without bidding the upcard's
    /// suit is trump and the calling team is chosen at random too.
    fn root<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> EuchreState {
        let n = self.config.hand_size();
        let mut deck = Deck::shuffled(rng);
        let hands = std::array::from_fn(|_| deck.deal(n));
        // at most 21 of 24 cards are dealt, so the deck never runs dry here
        let upcard = deck.draw().unwrap_or_default();
        let dealer = rng.random_range(0..SEATS);
        let state = EuchreState::dealt(hands, upcard, dealer);
        match self.config.bidding() {
            true => state,
            false => state.fixed(rng.random_range(0..TEAMS)),
        }
    }
}

use trick_cards::Card;
use trick_cards::Suit;
use trick_cfr::CfrEdge;

/// Every move in a hand of Euchre.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum EuchreEdge {
    /// Decline to name trump.
    Pass,
    /// Name trump; in the first round this orders the upcard to the dealer.
    Call(Suit),
    /// Dealer buries the card at this position of their sorted hand.
    Discard(u8),
    /// Play a card to the current trick.
    Play(Card),
}

impl CfrEdge for EuchreEdge {}

impl std::fmt::Display for EuchreEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Call(suit) => write!(f, "call {}", suit),
            Self::Discard(slot) => write!(f, "discard {}", slot),
            Self::Play(card) => write!(f, "play {}", card),
        }
    }
}

/// Stage of a hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Bidding turn counted from the seat left of the dealer.
    /// Turns 0..4 may order up the upcard, turns 4..8 may name another suit.
    Bidding(u8),
    /// Dealer picked up the upcard and must bury one card.
    Discard,
    /// Tricks are being played.
    Play,
}

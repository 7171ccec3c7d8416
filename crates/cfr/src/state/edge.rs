/// An action available at a decision point.
///
/// Edges key the per-information-set accumulators, so they must be cheap
/// to copy, totally ordered, and hashable. Variants are game-specific:
/// calling a trump suit, playing a card, discarding a slot, passing.
pub trait CfrEdge:
    Copy
    + Clone
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + std::hash::Hash
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
{
}

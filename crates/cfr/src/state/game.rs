use crate::*;

/// The rules of a game and the chance event that starts each hand.
///
/// Trainers depend only on this trait, so any extensive-form game that can
/// deal a random root and expose [`CfrState`] can be solved.
pub trait CfrGame: Send + Sync {
    type E: CfrEdge;
    type S: CfrState<E = Self::E>;
    /// Number of players, constant for the game.
    fn players(&self) -> usize;
    /// A freshly dealt root state.
    fn root<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Self::S;
}

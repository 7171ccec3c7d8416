use crate::*;
use trick_core::CfrError;
use trick_core::Position;
use trick_core::Utility;

/// A node of the extensive-form game tree.
///
/// States have value semantics: [`CfrState::apply`] returns a fresh
/// snapshot and never touches `self`, so sibling branches of a traversal
/// never alias one another.
///
/// # Contract
///
/// - `choices()` is non-empty exactly when the state is not terminal, and is
///   a pure function of the state.
/// - `apply(edge)` fails with [`CfrError::IllegalAction`] for any edge not in
///   `choices()`. Deterministic side effects (resolving a completed trick)
///   happen inside the transition.
/// - `payoff(player)` is defined for every player at terminal states only.
/// - `key()` is defined at decision nodes only, and depends solely on what
///   the acting player can observe. Equal keys must imply equal `choices()`.
pub trait CfrState: Clone + Send + Sync + Sized {
    type E: CfrEdge;
    fn turn(&self) -> Turn;
    fn choices(&self) -> Vec<Self::E>;
    fn apply(&self, edge: &Self::E) -> Result<Self, CfrError>;
    fn payoff(&self, player: Position) -> Result<Utility, CfrError>;
    fn key(&self) -> Result<String, CfrError>;

    fn actor(&self) -> Option<Position> {
        self.turn().actor()
    }
    fn is_terminal(&self) -> bool {
        self.turn().is_terminal()
    }
}

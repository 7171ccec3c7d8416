use super::edge::EuchreEdge;
use super::state::EuchreState;
use rand::rngs::SmallRng;
use trick_cfr::*;
use trick_core::*;

/// Plays perfectly with every hand face up.
///
/// Alpha-beta search over the rest of the hand, each team maximizing its
/// own payoff. It cheats by construction and only makes sense as a
/// ceiling for the other agents in an arena.
#[derive(Debug, Default, Clone, Copy)]
pub struct Oracle;

impl Oracle {
    /// Value of `state` for `seat` under perfect play by both teams.
    pub fn value(state: &EuchreState, seat: Position) -> Result<Utility, CfrError> {
        Self::search(state, seat, Utility::NEG_INFINITY, Utility::INFINITY)
    }

    fn search(
        state: &EuchreState,
        seat: Position,
        mut alpha: Utility,
        mut beta: Utility,
    ) -> Result<Utility, CfrError> {
        let actor = match state.turn() {
            Turn::Terminal => return state.payoff(seat),
            Turn::Choice(actor) => actor,
        };
        let ours = actor % TEAMS == seat % TEAMS;
        let mut best = match ours {
            true => Utility::NEG_INFINITY,
            false => Utility::INFINITY,
        };
        for ref edge in state.choices() {
            let value = Self::search(&state.apply(edge)?, seat, alpha, beta)?;
            match ours {
                true => {
                    best = best.max(value);
                    alpha = alpha.max(value);
                }
                false => {
                    best = best.min(value);
                    beta = beta.min(value);
                }
            }
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }
}

impl Agent<EuchreState> for Oracle {
    /// First action with the highest perfect-information value.
    fn act(&mut self, state: &EuchreState, _: &mut SmallRng) -> Result<EuchreEdge, CfrError> {
        let seat = state
            .actor()
            .ok_or_else(|| CfrError::InvalidState("no one to act in a finished hand".into()))?;
        let mut best = None::<(EuchreEdge, Utility)>;
        for edge in state.choices() {
            let floor = best.map(|(_, v)| v).unwrap_or(Utility::NEG_INFINITY);
            let value = Self::search(&state.apply(&edge)?, seat, floor, Utility::INFINITY)?;
            if value > floor {
                best = Some((edge, value));
            }
        }
        best.map(|(edge, _)| edge)
            .ok_or_else(|| CfrError::InvalidState("no legal actions to search".into()))
    }
}

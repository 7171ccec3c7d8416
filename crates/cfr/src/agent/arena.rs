use crate::*;
use rand::rngs::SmallRng;
use trick_core::*;

/// Plays `hands` complete hands between seated agents.
///
/// Seat `i` is played by `agents[i]`. Returns each seat's mean payoff.
pub fn play<G>(
    game: &G,
    agents: &mut [Box<dyn Agent<G::S>>],
    hands: usize,
    rng: &mut SmallRng,
) -> Result<Vec<Utility>, CfrError>
where
    G: CfrGame,
{
    let players = game.players();
    if agents.len() != players {
        return Err(CfrError::InvalidState(format!(
            "{} agents seated at a {} player game",
            agents.len(),
            players
        )));
    }
    let mut totals = vec![0.; players];
    for _ in 0..hands {
        let mut state = game.root(rng);
        while let Turn::Choice(seat) = state.turn() {
            let ref edge = agents[seat].act(&state, rng)?;
            state = state.apply(edge)?;
        }
        for (seat, total) in totals.iter_mut().enumerate() {
            *total += state.payoff(seat)?;
        }
    }
    Ok(totals
        .into_iter()
        .map(|t| t / hands.max(1) as Utility)
        .collect())
}

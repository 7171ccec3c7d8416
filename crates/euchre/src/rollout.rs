use super::edge::EuchreEdge;
use super::state::EuchreState;
use rand::rngs::SmallRng;
use trick_cards::*;
use trick_cfr::*;
use trick_core::*;

/// Redeals every card the actor cannot see, consistent with what they can.
///
/// The actor keeps their hand. Public facts are preserved: played cards,
/// the face-up upcard, the ordered-up upcard still in the dealer's hand,
/// and every shown void. A dealer also remembers their own discard.
/// Seats with the most voids are filled first; a draw that paints itself
/// into a corner is retried from scratch.
pub fn determinize(state: &EuchreState, rng: &mut SmallRng) -> Result<EuchreState, CfrError> {
    let pov = state
        .actor()
        .ok_or_else(|| CfrError::InvalidState("cannot determinize a finished hand".into()))?;
    let played = state.gone.union(&state.table.iter().copied().collect());
    let pinned = state.picked && state.dealer != pov && !played.contains(&state.upcard);
    let mut known = state.hands[pov].union(&played);
    if !state.picked || pinned {
        known.add(state.upcard);
    }
    if let Some(discard) = state.discard.filter(|_| pov == state.dealer) {
        known.add(discard);
    }
    let mut seats = (0..SEATS).filter(|s| *s != pov).collect::<Vec<_>>();
    seats.sort_by_key(|s| std::cmp::Reverse(state.voids[*s].count_ones()));
    for _ in 0..ROLLOUT_RETRIES {
        if let Some(hands) = redeal(state, known.complement(), pinned, &seats, rng) {
            let mut world = state.clone();
            world.hands = hands;
            if pov != state.dealer {
                world.discard = None;
            }
            return Ok(world);
        }
    }
    Err(CfrError::InvalidState(format!(
        "no deal agrees with seat {} after {} tries",
        pov, ROLLOUT_RETRIES
    )))
}

fn redeal(
    state: &EuchreState,
    pool: Hand,
    pinned: bool,
    seats: &[Position],
    rng: &mut SmallRng,
) -> Option<[Hand; SEATS]> {
    let mut hands = state.hands;
    let mut deck = Deck::from_hand(pool, rng).collect::<Vec<Card>>();
    for &seat in seats {
        let mut hand = Hand::empty();
        if pinned && seat == state.dealer {
            hand.add(state.upcard);
        }
        while hand.size() < state.hands[seat].size() {
            let i = deck
                .iter()
                .position(|c| state.voids[seat] & EuchreState::bit(c.effective(state.trump)) == 0)?;
            hand.add(deck.remove(i));
        }
        hands[seat] = hand;
    }
    Some(hands)
}

/// Plays uniformly random legal actions until the hand ends.
pub fn simulate(state: &EuchreState, rng: &mut SmallRng) -> Result<EuchreState, CfrError> {
    let mut state = state.clone();
    while !state.is_terminal() {
        let ref edge = Uniform.act(&state, rng)?;
        state = state.apply(edge)?;
    }
    Ok(state)
}

/// Monte Carlo value of each legal action for the actor.
///
/// `samples` is split evenly across actions, at least one trial each.
/// Every trial redeals the hidden cards, takes the action, and plays out
/// randomly, scoring the result from the actor's seat.
pub fn score(
    state: &EuchreState,
    samples: usize,
    rng: &mut SmallRng,
) -> Result<Vec<(EuchreEdge, Utility)>, CfrError> {
    let pov = state
        .actor()
        .ok_or_else(|| CfrError::InvalidState("nothing to score in a finished hand".into()))?;
    let choices = state.choices();
    let trials = (samples / choices.len().max(1)).max(1);
    log::debug!("scoring {} actions with {} trials each", choices.len(), trials);
    choices
        .into_iter()
        .map(|edge| {
            (0..trials)
                .map(|_| {
                    let world = determinize(state, rng)?;
                    simulate(&world.apply(&edge)?, rng)?.payoff(pov)
                })
                .sum::<Result<Utility, CfrError>>()
                .map(|total| (edge, total / trials as Utility))
        })
        .collect()
}

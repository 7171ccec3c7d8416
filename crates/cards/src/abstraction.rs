use super::card::Card;
use super::hand::Hand;
use super::ranking::Ranking;
use super::suit::Suit;

/// A run of interchangeable card plays collapsed into one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    members: Hand,
    representative: Card,
}

impl Group {
    fn new(card: Card) -> Self {
        Self {
            members: Hand::from(card),
            representative: card,
        }
    }
    fn extend(&mut self, card: Card) {
        self.members.add(card);
        self.representative = card;
    }
    /// Every concrete card this group stands in for.
    pub fn members(&self) -> Hand {
        self.members
    }
    /// Highest-ranked member, played whenever the group is chosen.
    pub fn representative(&self) -> Card {
        self.representative
    }
}

/// Partition playable cards into strategically equivalent runs.
///
/// Walks `ranking` from weakest to strongest. Playable cards sharing an
/// effective suit stay in one run while only `gone` cards (out of play for
/// good) sit between them; any other card in between breaks the run.
/// Cards on the table this trick must not be passed as `gone`, since
/// beating them or not is exactly what separates two plays.
pub fn group(ranking: &Ranking, playable: Hand, gone: Hand, trump: Option<Suit>) -> Vec<Group> {
    let mut groups = Vec::<Group>::with_capacity(playable.size());
    let mut open = false;
    for card in ranking.cards() {
        if playable.contains(&card) {
            match groups.last_mut() {
                Some(group) if open && group.representative().effective(trump) == card.effective(trump) => {
                    group.extend(card)
                }
                _ => groups.push(Group::new(card)),
            }
            open = true;
        } else if !gone.contains(&card) {
            open = false;
        }
    }
    groups
}

/// Representatives of every group, weakest first.
pub fn representatives(ranking: &Ranking, playable: Hand, gone: Hand, trump: Option<Suit>) -> Vec<Card> {
    group(ranking, playable, gone, trump)
        .into_iter()
        .map(|g| g.representative())
        .collect()
}

use super::card::Card;
use super::suit::Suit;

/// An unordered set of cards as a 24-bit bitmask.
///
/// Every collection in a hand of Euchre (a seat's cards, the kitty, the
/// cards already out of play) is a `Hand`. Iteration always yields cards
/// in ascending encoding order, which makes rendering canonical for free.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u32);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn full() -> Self {
        Self(Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u32::from(*card) != 0
    }
    pub fn add(&mut self, card: Card) {
        self.0 |= u32::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u32::from(card);
    }
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }
    pub fn minus(&self, other: &Self) -> Self {
        Self(self.0 & !other.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    /// Cards that follow the given suit once trump is known.
    pub fn following(&self, suit: Suit, trump: Option<Suit>) -> Self {
        self.into_iter()
            .filter(|c| c.effective(trump) == suit)
            .collect()
    }
    /// The card at position `i` in ascending order.
    pub fn slot(&self, i: usize) -> Option<Card> {
        Iterator::nth(&mut { *self }, i)
    }

    const fn mask() -> u32 {
        0x00FFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            bits => {
                let card = Card::try_from(bits.trailing_zeros() as u8).ok()?;
                self.remove(card);
                Some(card)
            }
        }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u32::from).fold(0, |a, b| a | b))
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u32::from(card))
    }
}

/// u32 isomorphism
impl From<u32> for Hand {
    fn from(n: u32) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u32 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}

/// str isomorphism
/// this follows from Vec<Card> isomorphism
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self::from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.into_iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

use super::card::Card;
use super::hand::Hand;
use rand::seq::SliceRandom;

/// A shuffled 24-card Euchre deck.
///
/// Shuffling draws from a caller-supplied rng so dealing stays
/// reproducible under a fixed training seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Shuffles all 24 cards.
    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_hand(Hand::full(), rng)
    }
    /// Shuffles an arbitrary subset of cards.
    pub fn from_hand<R: rand::Rng + ?Sized>(hand: Hand, rng: &mut R) -> Self {
        let mut cards = Vec::<Card>::from(hand);
        cards.shuffle(rng);
        Self(cards)
    }
    /// Cards remaining.
    pub fn size(&self) -> usize {
        self.0.len()
    }
    /// Draws the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }
    /// Deals `n` cards off the top as a hand.
    pub fn deal(&mut self, n: usize) -> Hand {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.draw()
    }
}

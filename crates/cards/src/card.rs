use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 24 cards are bijectively mapped to `0..24` where the encoding is
/// `rank * 4 + suit`, so cards sort first by face value, then by suit.
///
/// Parsing accepts two-character strings like `"Js"` (jack of spades)
/// or `"9d"` (nine of diamonds).
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (Nine through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the natural suit component.
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// The jack of trump.
    pub fn right(trump: Suit) -> Self {
        Self::from((Rank::Jack, trump))
    }
    /// The jack of trump's same-colour partner suit.
    pub fn left(trump: Suit) -> Self {
        Self::from((Rank::Jack, trump.complement()))
    }
    /// Suit this card follows as once trump is known.
    /// The left bower belongs to trump, never to its printed suit.
    pub fn effective(&self, trump: Option<Suit>) -> Suit {
        match trump {
            Some(trump) if *self == Self::left(trump) => trump,
            _ => self.suit(),
        }
    }
    /// All 24 cards in encoding order.
    pub fn all() -> impl Iterator<Item = Card> {
        (0..24u8).map(Card)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0..24
/// Js
/// 11
/// 0b00001011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0..24 => Ok(Self(n)),
            _ => Err(format!("invalid card index: {}", n)),
        }
    }
}

/// u32 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u32 {
    fn from(c: Card) -> u32 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.chars().count() {
            2 => {
                let mut chars = s.chars();
                let rank = chars.next().map(String::from).unwrap_or_default();
                let suit = chars.next().map(String::from).unwrap_or_default();
                let rank = Rank::try_from(rank.as_str())?;
                let suit = Suit::try_from(suit.as_str())?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("card str must be 2 characters: {}", s)),
        }
    }
}
impl Card {
    /// Parses whitespace-separated card notations into a vector of cards.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace().map(Card::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        for card in Card::all() {
            assert!(card == Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn bijective_u8() {
        for card in Card::all() {
            assert_eq!(Ok(card), Card::try_from(u8::from(card)));
        }
        assert!(Card::try_from(24u8).is_err());
    }

    #[test]
    fn bijective_str() {
        for card in Card::all() {
            assert_eq!(Ok(card), Card::try_from(card.to_string().as_str()));
        }
        assert!(Card::try_from("Jx").is_err());
        assert!(Card::try_from("J").is_err());
    }

    #[test]
    fn bowers_follow_trump() {
        let left = Card::try_from("Jh").unwrap();
        let right = Card::try_from("Jd").unwrap();
        assert_eq!(Card::left(Suit::D), left);
        assert_eq!(Card::right(Suit::D), right);
        assert_eq!(left.effective(Some(Suit::D)), Suit::D);
        assert_eq!(left.effective(Some(Suit::H)), Suit::H);
        assert_eq!(left.effective(Some(Suit::S)), Suit::H);
        assert_eq!(left.effective(None), Suit::H);
    }

    #[test]
    fn parses_many() {
        let cards = Card::parse("9c Td  As").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2], Card::from((Rank::Ace, Suit::S)));
        assert!(Card::parse("9c Zz").is_err());
    }
}

use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use trick_core::CfrError;

/// Strict total order over all 24 cards for one trick.
///
/// Index ascending means stronger. A resolved ranking places off-suits
/// lowest, then the led suit, then trump, then the left and right bowers
/// on top. Within each suit cards ascend by face value.
///
/// Before a card is led there is no lead suit, so card-play abstraction
/// falls back to a fixed suit-major order with no bower promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    order: Vec<Card>,
    index: [u8; 24],
}

impl Ranking {
    /// Ranking for a trick with the given trump and led suit.
    pub fn new(trump: Suit, lead: Suit) -> Self {
        let right = Card::right(trump);
        let left = Card::left(trump);
        let offs = Suit::all()
            .into_iter()
            .filter(|s| *s != trump && *s != lead)
            .flat_map(Self::ascending);
        let leads = Some(lead)
            .filter(|s| *s != trump)
            .into_iter()
            .flat_map(Self::ascending);
        let trumps = Self::ascending(trump);
        Self::from(
            offs.chain(leads)
                .chain(trumps)
                .filter(|c| *c != left && *c != right)
                .chain([left, right])
                .collect::<Vec<_>>(),
        )
    }
    /// Ranking that requires both trump and lead to be established.
    pub fn resolve(trump: Option<Suit>, lead: Option<Suit>) -> Result<Self, CfrError> {
        match (trump, lead) {
            (None, _) => Err(CfrError::InvalidState(
                "card rankings requested before trump was called".into(),
            )),
            (_, None) => Err(CfrError::InvalidState(
                "card rankings requested before a card was led".into(),
            )),
            (Some(trump), Some(lead)) => Ok(Self::new(trump, lead)),
        }
    }
    /// Fixed suit-major order used while a trick is still unled.
    pub fn fallback() -> Self {
        Self::from(
            Suit::all()
                .into_iter()
                .flat_map(Self::ascending)
                .collect::<Vec<_>>(),
        )
    }
    /// Position of a card in the order, 0 being the weakest.
    pub fn index(&self, card: &Card) -> usize {
        self.index[u8::from(*card) as usize] as usize
    }
    /// Cards from weakest to strongest.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.order.iter().copied()
    }
    /// Strongest of the given cards.
    pub fn best<I>(&self, cards: I) -> Option<Card>
    where
        I: IntoIterator<Item = Card>,
    {
        cards.into_iter().max_by_key(|c| self.index(c))
    }

    fn ascending(suit: Suit) -> impl Iterator<Item = Card> {
        Rank::all().into_iter().map(move |r| Card::from((r, suit)))
    }
}

impl From<Vec<Card>> for Ranking {
    fn from(order: Vec<Card>) -> Self {
        debug_assert!(order.len() == 24);
        let mut index = [0u8; 24];
        for (i, card) in order.iter().enumerate() {
            index[u8::from(*card) as usize] = i as u8;
        }
        Self { order, index }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    macro_rules! total_order {
        ($($name:ident: $trump:expr, $lead:expr;)*) => {
            paste::paste! {
                $(
                    #[test]
                    fn [<strict_total_order_ $name>]() {
                        let ranking = Ranking::new($trump, $lead);
                        let seen = ranking.cards().collect::<HashSet<_>>();
                        assert_eq!(seen.len(), 24);
                        assert!(Card::all().all(|c| ranking.cards().nth(ranking.index(&c)) == Some(c)));
                        let top = ranking.cards().skip(22).collect::<Vec<_>>();
                        assert_eq!(top, vec![Card::left($trump), Card::right($trump)]);
                    }
                )*
            }
        };
    }

    total_order! {
        dd: Suit::D, Suit::D;
        dh: Suit::D, Suit::H;
        dc: Suit::D, Suit::C;
        sc: Suit::S, Suit::C;
        sh: Suit::S, Suit::H;
        hd: Suit::H, Suit::D;
        cs: Suit::C, Suit::S;
        cc: Suit::C, Suit::C;
    }

    #[test]
    fn diamonds_trump_hearts_led() {
        let ranking = Ranking::new(Suit::D, Suit::H);
        let right = ranking.index(&card("Jd"));
        let left = ranking.index(&card("Jh"));
        let ace = ranking.index(&card("Ad"));
        assert!(right > left);
        assert!(left > ace);
        assert!(ranking.index(&card("9d")) > ranking.index(&card("Ah")));
        assert!(ranking.index(&card("9h")) > ranking.index(&card("As")));
        assert!(ranking.index(&card("Qh")) > ranking.index(&card("Th")));
    }

    #[test]
    fn trump_order_ignores_lead() {
        for trump in Suit::all() {
            let trumps = |lead| {
                let ranking = Ranking::new(trump, lead);
                let mut cards = Rank::all()
                    .into_iter()
                    .map(|r| Card::from((r, trump)))
                    .chain([Card::left(trump)])
                    .collect::<Vec<_>>();
                cards.sort_by_key(|c| ranking.index(c));
                cards
            };
            let reference = trumps(trump);
            for lead in Suit::all() {
                assert_eq!(trumps(lead), reference);
            }
        }
    }

    #[test]
    fn off_suits_rank_lowest() {
        let ranking = Ranking::new(Suit::S, Suit::D);
        let lowest = ranking.cards().take(11).collect::<Vec<_>>();
        assert!(lowest.iter().all(|c| c.suit() == Suit::C || c.suit() == Suit::H));
        assert!(!lowest.contains(&card("Jc")));
        assert_eq!(ranking.cards().next(), Some(card("9c")));
        assert_eq!(ranking.cards().nth(11), Some(card("9d")));
    }

    #[test]
    fn fallback_is_fixed_without_bowers() {
        let ranking = Ranking::fallback();
        assert_eq!(ranking.cards().count(), 24);
        assert_eq!(ranking.cards().next(), Some(card("9c")));
        assert_eq!(ranking.cards().last(), Some(card("As")));
        assert!(ranking.index(&card("Jc")) < ranking.index(&card("Qc")));
        assert!(ranking.index(&card("Ac")) < ranking.index(&card("9d")));
    }

    #[test]
    fn resolve_fails_loudly() {
        assert!(matches!(
            Ranking::resolve(None, Some(Suit::H)),
            Err(CfrError::InvalidState(_))
        ));
        assert!(matches!(
            Ranking::resolve(Some(Suit::H), None),
            Err(CfrError::InvalidState(_))
        ));
        assert_eq!(
            Ranking::resolve(Some(Suit::H), Some(Suit::C)),
            Ok(Ranking::new(Suit::H, Suit::C))
        );
    }

    #[test]
    fn best_of_trick() {
        let ranking = Ranking::new(Suit::C, Suit::H);
        let trick = Card::parse("Ah Kh Js 9c").unwrap();
        assert_eq!(ranking.best(trick), Some(card("Js")));
        let trick = Card::parse("Th Ad Qh 9s").unwrap();
        assert_eq!(ranking.best(trick), Some(card("Qh")));
    }
}

use super::edge::EuchreEdge;
use super::phase::Phase;
use trick_cards::*;
use trick_cfr::*;
use trick_core::*;

/// One hand of Euchre in progress.
///
/// Seats 0 and 2 form team 0, seats 1 and 3 team 1. Cards face down in the
/// kitty or never dealt are not stored; they are whatever no hand, trick,
/// or face-up upcard accounts for (see [`EuchreState::hidden`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EuchreState {
    pub(crate) hands: [Hand; SEATS],
    /// Suits each seat has shown out of, one bit per suit.
    pub(crate) voids: [u8; SEATS],
    pub(crate) upcard: Card,
    pub(crate) picked: bool,
    pub(crate) discard: Option<Card>,
    pub(crate) table: Vec<Card>,
    /// Cards of completed tricks. The current trick lives in `table`.
    pub(crate) gone: Hand,
    pub(crate) phase: Phase,
    pub(crate) dealer: Position,
    pub(crate) actor: Position,
    pub(crate) leader: Position,
    pub(crate) trump: Option<Suit>,
    pub(crate) lead: Option<Suit>,
    pub(crate) callers: Option<usize>,
    pub(crate) tricks: [u8; TEAMS],
    pub(crate) size: u8,
}

// ============================================================================
// Dealing
// ============================================================================

impl EuchreState {
    /// A fresh deal about to be bid on, seat left of the dealer first.
    pub fn bidding(hands: [Hand; SEATS], upcard: Card, dealer: Position) -> Result<Self, CfrError> {
        Self::check(&hands, upcard, dealer)?;
        Ok(Self::dealt(hands, upcard, dealer))
    }
    /// A fresh deal with trump fixed to the upcard's suit and `callers`
    /// already committed to it.
    pub fn playing(
        hands: [Hand; SEATS],
        upcard: Card,
        dealer: Position,
        callers: usize,
    ) -> Result<Self, CfrError> {
        Self::check(&hands, upcard, dealer)?;
        if callers >= TEAMS {
            return Err(CfrError::InvalidState(format!("no team {}", callers)));
        }
        Ok(Self::dealt(hands, upcard, dealer).fixed(callers))
    }

    pub(crate) fn dealt(hands: [Hand; SEATS], upcard: Card, dealer: Position) -> Self {
        let first = (dealer + 1) % SEATS;
        Self {
            size: hands[0].size() as u8,
            hands,
            voids: [0; SEATS],
            upcard,
            picked: false,
            discard: None,
            table: Vec::with_capacity(SEATS),
            gone: Hand::empty(),
            phase: Phase::Bidding(0),
            dealer,
            actor: first,
            leader: first,
            trump: None,
            lead: None,
            callers: None,
            tricks: [0; TEAMS],
        }
    }
    pub(crate) fn fixed(mut self, callers: usize) -> Self {
        self.phase = Phase::Play;
        self.trump = Some(self.upcard.suit());
        self.callers = Some(callers);
        self
    }

    fn check(hands: &[Hand; SEATS], upcard: Card, dealer: Position) -> Result<(), CfrError> {
        let size = hands[0].size();
        let dealt = hands.iter().fold(Hand::empty(), |acc, h| acc.union(h));
        if dealer >= SEATS {
            Err(CfrError::InvalidState(format!("no seat {}", dealer)))
        } else if size == 0 || size > HAND_SIZE || hands.iter().any(|h| h.size() != size) {
            Err(CfrError::InvalidState("hands must hold 1 to 5 cards each, all equal".into()))
        } else if dealt.size() != SEATS * size || dealt.contains(&upcard) {
            Err(CfrError::InvalidState("deal repeats a card".into()))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Observation
// ============================================================================

impl EuchreState {
    pub fn hand(&self, seat: Position) -> Hand {
        self.hands[seat % SEATS]
    }
    pub fn upcard(&self) -> Card {
        self.upcard
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn dealer(&self) -> Position {
        self.dealer
    }
    pub fn leader(&self) -> Position {
        self.leader
    }
    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }
    pub fn lead(&self) -> Option<Suit> {
        self.lead
    }
    /// Team that named trump, once someone has.
    pub fn callers(&self) -> Option<usize> {
        self.callers
    }
    pub fn tricks(&self) -> [u8; TEAMS] {
        self.tricks
    }
    pub fn table(&self) -> &[Card] {
        &self.table
    }
    pub fn gone(&self) -> Hand {
        self.gone
    }
    /// Whether `seat` has shown out of `suit`.
    pub fn void(&self, seat: Position, suit: Suit) -> bool {
        self.voids[seat % SEATS] & Self::bit(suit) != 0
    }
    /// Cards not in any hand, trick, or face up on the kitty.
    pub fn hidden(&self) -> Hand {
        let mut seen = self
            .hands
            .iter()
            .fold(self.gone, |acc, h| acc.union(h))
            .union(&self.table.iter().copied().collect());
        if !self.picked {
            seen.add(self.upcard);
        }
        seen.complement()
    }

    pub(crate) fn bit(suit: Suit) -> u8 {
        1 << u8::from(suit)
    }

    /// Cards the actor may legally play under follow-suit.
    fn playable(&self) -> Hand {
        let hand = self.hands[self.actor];
        match self.lead {
            None => hand,
            Some(lead) => match hand.following(lead, self.trump) {
                same if same.is_empty() => hand,
                same => same,
            },
        }
    }
    /// Order used to group equivalent plays. Before a card is led only
    /// suit-major order is meaningful.
    fn grouping(&self) -> Ranking {
        // the fallback ignores bower promotion, so an unled Td Jd Qd under
        // diamonds leads as one Qd and the right bower is never led alone
        Ranking::resolve(self.trump, self.lead).unwrap_or_else(|_| Ranking::fallback())
    }
    fn bids(&self, turn: u8) -> Vec<EuchreEdge> {
        let turned = self.upcard.suit();
        let others = Suit::all()
            .into_iter()
            .filter(move |s| *s != turned)
            .map(EuchreEdge::Call);
        match turn as usize {
            t if t < SEATS => vec![EuchreEdge::Pass, EuchreEdge::Call(turned)],
            t if t + 1 < BIDDING_TURNS => std::iter::once(EuchreEdge::Pass).chain(others).collect(),
            _ => others.collect(),
        }
    }
    /// Whether the winning team and its points can no longer change.
    fn decided(&self) -> bool {
        match self.callers {
            None => false,
            Some(callers) => {
                let n = self.size;
                let made = self.tricks[callers];
                let set = self.tricks[1 - callers];
                made + set == n || set * 2 > n || (set >= 1 && made * 2 >= n)
            }
        }
    }
    fn points(&self) -> Result<[Utility; TEAMS], CfrError> {
        let callers = self
            .callers
            .ok_or_else(|| CfrError::InvalidState("hand ended without trump".into()))?;
        let defenders = 1 - callers;
        let mut points = [0.; TEAMS];
        match (self.tricks[callers], self.tricks[defenders]) {
            (made, set) if set > made => points[defenders] = 2.,
            (made, _) if made == self.size => points[callers] = 2.,
            _ => points[callers] = 1.,
        }
        Ok(points)
    }
}

// ============================================================================
// Transitions
// ============================================================================

impl EuchreState {
    fn pass(&mut self, turn: u8) {
        self.phase = Phase::Bidding(turn + 1);
        self.actor = (self.actor + 1) % SEATS;
    }
    fn call(&mut self, turn: u8, suit: Suit) {
        self.trump = Some(suit);
        self.callers = Some(self.actor % TEAMS);
        if (turn as usize) < SEATS {
            self.hands[self.dealer].add(self.upcard);
            self.picked = true;
            self.phase = Phase::Discard;
            self.actor = self.dealer;
        } else {
            self.phase = Phase::Play;
            self.actor = self.leader;
        }
    }
    fn bury(&mut self, slot: u8) -> Result<(), CfrError> {
        let card = self.hands[self.actor]
            .slot(slot as usize)
            .ok_or_else(|| CfrError::IllegalAction(format!("no card in slot {}", slot)))?;
        self.hands[self.actor].remove(card);
        self.discard = Some(card);
        self.phase = Phase::Play;
        self.actor = self.leader;
        Ok(())
    }
    fn play(&mut self, card: Card) -> Result<(), CfrError> {
        self.hands[self.actor].remove(card);
        let suit = card.effective(self.trump);
        match self.lead {
            None => self.lead = Some(suit),
            Some(lead) if lead != suit => self.voids[self.actor] |= Self::bit(lead),
            Some(_) => {}
        }
        self.table.push(card);
        if self.table.len() < SEATS {
            self.actor = (self.actor + 1) % SEATS;
            return Ok(());
        }
        let ranking = Ranking::resolve(self.trump, self.lead)?;
        let best = ranking
            .best(self.table.iter().copied())
            .ok_or_else(|| CfrError::InvalidState("empty trick".into()))?;
        let offset = self
            .table
            .iter()
            .position(|c| *c == best)
            .ok_or_else(|| CfrError::InvalidState("winner left the trick".into()))?;
        let winner = (self.leader + offset) % SEATS;
        log::trace!("seat {} takes {:?} with {}", winner, self.table, best);
        self.tricks[winner % TEAMS] += 1;
        self.gone = self.table.drain(..).fold(self.gone, |mut gone, c| {
            gone.add(c);
            gone
        });
        self.lead = None;
        self.leader = winner;
        self.actor = winner;
        Ok(())
    }
}

impl CfrState for EuchreState {
    type E = EuchreEdge;

    fn turn(&self) -> Turn {
        match self.phase {
            Phase::Play if self.decided() => Turn::Terminal,
            _ => Turn::Choice(self.actor),
        }
    }

    fn choices(&self) -> Vec<EuchreEdge> {
        if self.is_terminal() {
            return Vec::new();
        }
        match self.phase {
            Phase::Bidding(turn) => self.bids(turn),
            Phase::Discard => (0..self.hands[self.actor].size() as u8)
                .map(EuchreEdge::Discard)
                .collect(),
            Phase::Play => representatives(&self.grouping(), self.playable(), self.gone, self.trump)
                .into_iter()
                .map(EuchreEdge::Play)
                .collect(),
        }
    }

    fn apply(&self, edge: &EuchreEdge) -> Result<Self, CfrError> {
        if !self.choices().contains(edge) {
            return Err(CfrError::IllegalAction(format!(
                "{} by seat {} during {:?}",
                edge, self.actor, self.phase
            )));
        }
        let mut next = self.clone();
        match (self.phase, *edge) {
            (Phase::Bidding(turn), EuchreEdge::Pass) => next.pass(turn),
            (Phase::Bidding(turn), EuchreEdge::Call(suit)) => next.call(turn, suit),
            (Phase::Discard, EuchreEdge::Discard(slot)) => next.bury(slot)?,
            (Phase::Play, EuchreEdge::Play(card)) => next.play(card)?,
            (phase, edge) => {
                return Err(CfrError::IllegalAction(format!("{} during {:?}", edge, phase)));
            }
        }
        Ok(next)
    }

    fn payoff(&self, player: Position) -> Result<Utility, CfrError> {
        if !self.is_terminal() {
            return Err(CfrError::InvalidState("hand still in progress".into()));
        }
        if player >= SEATS {
            return Err(CfrError::InvalidState(format!("no seat {}", player)));
        }
        let team = player % TEAMS;
        let points = self.points()?;
        Ok(points[team] - points[1 - team])
    }

    /// Everything the actor knows that can matter, in a fixed field order.
    ///
    /// - bidding: `B{turn}|{upcard}|{hand}`
    /// - discard: `D|{trump}|{hand}`
    /// - play: `P|{trump}|{lead}|{hand}|{table}|{gone}|{side}`, where side is
    ///   `C` when the actor's team called trump and `D` otherwise
    fn key(&self) -> Result<String, CfrError> {
        if self.is_terminal() {
            return Err(CfrError::InvalidState("finished hands have no information set".into()));
        }
        let hand = self.hands[self.actor];
        let trump = || {
            self.trump
                .ok_or_else(|| CfrError::InvalidState("trump not named".into()))
        };
        match self.phase {
            Phase::Bidding(turn) => Ok(format!("B{}|{}|{}", turn, self.upcard, hand)),
            Phase::Discard => Ok(format!("D|{}|{}", trump()?, hand)),
            Phase::Play => Ok(format!(
                "P|{}|{}|{}|{}|{}|{}",
                trump()?,
                self.lead.map(|s| s.to_string()).unwrap_or_else(|| "-".into()),
                hand,
                self.table.iter().map(Card::to_string).collect::<String>(),
                self.gone,
                match self.callers {
                    Some(team) if team == self.actor % TEAMS => 'C',
                    _ => 'D',
                }
            )),
        }
    }
}

impl std::fmt::Display for EuchreState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "dealer {}  upcard {}  {:?}", self.dealer, self.upcard, self.phase)?;
        if let (Some(trump), Some(callers)) = (self.trump, self.callers) {
            writeln!(f, "trump {} called by team {}", trump, callers)?;
        }
        for (seat, hand) in self.hands.iter().enumerate() {
            writeln!(f, "seat {}: {}", seat, hand)?;
        }
        write!(
            f,
            "table [{}]  tricks {}-{}",
            self.table.iter().map(Card::to_string).collect::<Vec<_>>().join(" "),
            self.tricks[0],
            self.tricks[1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hands(seats: [&str; SEATS]) -> [Hand; SEATS] {
        seats.map(|s| Hand::try_from(s).unwrap())
    }
    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }
    fn play(state: &EuchreState, s: &str) -> EuchreState {
        state.apply(&EuchreEdge::Play(card(s))).unwrap()
    }

    /// Trump hearts fixed by the upcard, team 0 calling, seat 0 leading.
    fn fixed() -> EuchreState {
        EuchreState::playing(hands(["Jd Tc", "Ah Ad", "9s 9c", "Ks Kc"]), card("Qh"), 3, 0).unwrap()
    }

    #[test]
    fn rejects_bad_deals() {
        let h = hands(["Jh", "9c", "As", "Tc"]);
        assert!(EuchreState::bidding(h, card("Jh"), 0).is_err());
        assert!(EuchreState::bidding(h, card("Qh"), 4).is_err());
        assert!(EuchreState::playing(h, card("Qh"), 0, 2).is_err());
        assert!(EuchreState::bidding(hands(["Jh", "9c", "As", "Tc Qc"]), card("Qh"), 0).is_err());
        assert!(EuchreState::bidding(hands(["Jh", "Jh", "As", "Tc"]), card("Qh"), 0).is_err());
        assert!(EuchreState::bidding(h, card("Qh"), 0).is_ok());
    }

    #[test]
    fn bidding_rounds() {
        let mut state = EuchreState::bidding(hands(["Jh", "9c", "As", "Tc"]), card("Qh"), 1).unwrap();
        for turn in 0..4 {
            assert_eq!(state.actor(), Some((2 + turn) % SEATS));
            assert_eq!(state.choices(), vec![EuchreEdge::Pass, EuchreEdge::Call(Suit::H)]);
            state = state.apply(&EuchreEdge::Pass).unwrap();
        }
        for _ in 4..7 {
            let choices = state.choices();
            assert_eq!(choices.len(), 4);
            assert_eq!(choices[0], EuchreEdge::Pass);
            assert!(!choices.contains(&EuchreEdge::Call(Suit::H)));
            state = state.apply(&EuchreEdge::Pass).unwrap();
        }
        assert_eq!(state.actor(), Some(1));
        assert_eq!(
            state.choices(),
            vec![EuchreEdge::Call(Suit::C), EuchreEdge::Call(Suit::D), EuchreEdge::Call(Suit::S)]
        );
        assert!(state.apply(&EuchreEdge::Pass).is_err());
        let state = state.apply(&EuchreEdge::Call(Suit::S)).unwrap();
        assert_eq!(state.trump(), Some(Suit::S));
        assert_eq!(state.callers(), Some(1));
        assert_eq!(state.phase(), Phase::Play);
        assert_eq!(state.actor(), Some(2));
    }

    #[test]
    fn ordering_up_makes_dealer_discard() {
        let state = EuchreState::bidding(hands(["Jh", "9c", "As", "Tc"]), card("Qh"), 3).unwrap();
        let state = state.apply(&EuchreEdge::Call(Suit::H)).unwrap();
        assert_eq!(state.phase(), Phase::Discard);
        assert_eq!(state.actor(), Some(3));
        assert_eq!(state.hand(3), Hand::try_from("Tc Qh").unwrap());
        assert_eq!(state.choices(), vec![EuchreEdge::Discard(0), EuchreEdge::Discard(1)]);
        let state = state.apply(&EuchreEdge::Discard(0)).unwrap();
        assert_eq!(state.hand(3), Hand::from(card("Qh")));
        assert!(state.hidden().contains(&card("Tc")));
        assert_eq!(state.actor(), Some(0));
        assert_eq!(state.choices(), vec![EuchreEdge::Play(card("Jh"))]);
    }

    #[test]
    fn single_trick_march() {
        let state = EuchreState::bidding(hands(["Jh", "9c", "As", "Tc"]), card("Qh"), 3).unwrap();
        let state = state.apply(&EuchreEdge::Call(Suit::H)).unwrap();
        let state = state.apply(&EuchreEdge::Discard(0)).unwrap();
        let state = ["Jh", "9c", "As", "Qh"].iter().fold(state, |s, c| play(&s, c));
        assert!(state.is_terminal());
        assert!(state.void(1, Suit::H));
        assert!(state.void(2, Suit::H));
        assert!(!state.void(3, Suit::H));
        assert_eq!(state.payoff(0).unwrap(), 2.);
        assert_eq!(state.payoff(2).unwrap(), 2.);
        assert_eq!(state.payoff(1).unwrap(), -2.);
        assert!(state.key().is_err());
        assert!(state.choices().is_empty());
    }

    #[test]
    fn left_bower_leads_trump() {
        let state = play(&fixed(), "Jd");
        assert_eq!(state.lead(), Some(Suit::H));
        assert_eq!(state.choices(), vec![EuchreEdge::Play(card("Ah"))]);
        let state = play(&state, "Ah");
        assert_eq!(state.choices().len(), 2);
        let state = play(&play(&state, "9s"), "Ks");
        assert_eq!(state.tricks(), [1, 0]);
        assert_eq!(state.leader(), 0);
        assert!(state.void(2, Suit::H));
        assert!(!state.is_terminal());
        assert!(state.payoff(0).is_err());
    }

    #[test]
    fn split_tricks_score_one_for_callers() {
        let state = ["Jd", "Ah", "9s", "Ks", "Tc", "Ad", "9c", "Kc"]
            .iter()
            .fold(fixed(), |s, c| play(&s, c));
        assert!(state.is_terminal());
        assert_eq!(state.tricks(), [1, 1]);
        assert!(state.void(1, Suit::C));
        assert_eq!(state.payoff(0).unwrap(), 1.);
        assert_eq!(state.payoff(3).unwrap(), -1.);
    }

    #[test]
    fn ends_once_decided() {
        // defenders take the first two of three tricks
        let state = EuchreState::playing(
            hands(["9c 9d Td", "Ac Ad Ts", "Tc Qd Qs", "Kc Kd Ks"]),
            card("Ah"),
            3,
            0,
        )
        .unwrap();
        let state = ["9c", "Ac", "Tc", "Kc"].iter().fold(state, |s, c| play(&s, c));
        assert_eq!(state.leader(), 1);
        assert!(!state.is_terminal());
        let state = ["Ad", "Qd", "Kd", "Td"].iter().fold(state, |s, c| play(&s, c));
        assert_eq!(state.tricks(), [0, 2]);
        assert!(state.is_terminal());
        assert_eq!(state.payoff(1).unwrap(), 2.);
        assert_eq!(state.payoff(0).unwrap(), -2.);
    }

    #[test]
    fn adjacent_cards_collapse() {
        let state =
            EuchreState::playing(hands(["Qh Kh", "9c 9d", "9s Ts", "Tc Td"]), card("Ah"), 3, 0).unwrap();
        assert_eq!(state.choices(), vec![EuchreEdge::Play(card("Kh"))]);
        assert!(matches!(
            state.apply(&EuchreEdge::Play(card("Qh"))),
            Err(CfrError::IllegalAction(_))
        ));
        assert!(state.apply(&EuchreEdge::Discard(0)).is_err());
    }

    #[test]
    fn unled_trump_run_absorbs_right_bower() {
        let state =
            EuchreState::playing(hands(["Td Jd Qd", "9c Tc Jc", "9s Ts Js", "9h Th Qh"]), card("Ad"), 3, 0)
                .unwrap();
        assert_eq!(state.choices(), vec![EuchreEdge::Play(card("Qd"))]);
        let next = play(&state, "Qd");
        assert_eq!(next.lead(), Some(Suit::D));
        assert!(next.hand(0).contains(&card("Jd")));
    }

    #[test]
    fn keys_hide_other_hands() {
        let a = EuchreState::playing(hands(["Jd Tc", "Ah Ad", "9s 9c", "Ks Kc"]), card("Qh"), 3, 0).unwrap();
        let b = EuchreState::playing(hands(["Jd Tc", "9s 9c", "Ah Ad", "Ks Kc"]), card("Qh"), 3, 0).unwrap();
        assert_eq!(a.key().unwrap(), b.key().unwrap());
        assert_eq!(a.choices(), b.choices());
        let a = play(&a, "Tc");
        assert!(a.key().unwrap().starts_with("P|h|c|"));
        assert!(a.key().unwrap().ends_with("|D"));
        let fresh = EuchreState::bidding(hands(["Jh", "9c", "As", "Tc"]), card("Qh"), 3).unwrap();
        assert!(fresh.key().unwrap().starts_with("B0|"));
    }
}

use super::*;
use crate::*;
use trick_core::*;

/// A node of Kuhn poker: both private cards plus the public betting line.
///
/// Cards are 0 (jack), 1 (queen), 2 (king). Each player antes one chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KuhnState {
    cards: [u8; 2],
    history: Vec<KuhnEdge>,
}

impl From<([u8; 2], Vec<KuhnEdge>)> for KuhnState {
    fn from((cards, history): ([u8; 2], Vec<KuhnEdge>)) -> Self {
        Self { cards, history }
    }
}

impl KuhnState {
    fn showdown(&self, player: Position, stake: Utility) -> Utility {
        match self.cards[player] > self.cards[1 - player] {
            true => stake,
            false => -stake,
        }
    }
    fn face(card: u8) -> char {
        match card {
            0 => 'J',
            1 => 'Q',
            _ => 'K',
        }
    }
}

impl CfrState for KuhnState {
    type E = KuhnEdge;
    fn turn(&self) -> Turn {
        use KuhnEdge::*;
        match self.history.as_slice() {
            [] | [Pass, Bet] => Turn::Choice(0),
            [_] => Turn::Choice(1),
            _ => Turn::Terminal,
        }
    }
    fn choices(&self) -> Vec<KuhnEdge> {
        match self.turn() {
            Turn::Terminal => vec![],
            Turn::Choice(_) => vec![KuhnEdge::Pass, KuhnEdge::Bet],
        }
    }
    fn apply(&self, edge: &KuhnEdge) -> Result<Self, CfrError> {
        match self.turn() {
            Turn::Terminal => Err(CfrError::IllegalAction(format!(
                "{} after the hand ended",
                edge
            ))),
            Turn::Choice(_) => {
                let mut history = self.history.clone();
                history.push(*edge);
                Ok(Self {
                    cards: self.cards,
                    history,
                })
            }
        }
    }
    fn payoff(&self, player: Position) -> Result<Utility, CfrError> {
        use KuhnEdge::*;
        if player > 1 {
            return Err(CfrError::InvalidState(format!("no player {}", player)));
        }
        let sign = |winner: Position| if winner == player { 1. } else { -1. };
        match self.history.as_slice() {
            [Pass, Pass] => Ok(self.showdown(player, 1.)),
            [Bet, Pass] => Ok(sign(0)),
            [Pass, Bet, Pass] => Ok(sign(1)),
            [Bet, Bet] | [Pass, Bet, Bet] => Ok(self.showdown(player, 2.)),
            _ => Err(CfrError::InvalidState("payoff before the hand ended".into())),
        }
    }
    fn key(&self) -> Result<String, CfrError> {
        match self.turn() {
            Turn::Terminal => Err(CfrError::InvalidState("key of a terminal node".into())),
            Turn::Choice(actor) => Ok(format!(
                "{}:{}",
                Self::face(self.cards[actor]),
                self.history.iter().map(|e| e.to_string()).collect::<String>()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use KuhnEdge::*;

    fn state(cards: [u8; 2], history: &[KuhnEdge]) -> KuhnState {
        KuhnState::from((cards, history.to_vec()))
    }

    #[test]
    fn turns_alternate() {
        assert_eq!(state([0, 1], &[]).turn(), Turn::Choice(0));
        assert_eq!(state([0, 1], &[Pass]).turn(), Turn::Choice(1));
        assert_eq!(state([0, 1], &[Pass, Bet]).turn(), Turn::Choice(0));
        assert!(state([0, 1], &[Bet, Bet]).is_terminal());
        assert!(state([0, 1], &[Pass, Bet, Pass]).is_terminal());
    }

    #[test]
    fn payoffs_are_zero_sum() {
        for history in [
            vec![Pass, Pass],
            vec![Bet, Pass],
            vec![Bet, Bet],
            vec![Pass, Bet, Pass],
            vec![Pass, Bet, Bet],
        ] {
            let s = KuhnState::from(([2, 0], history));
            assert_eq!(s.payoff(0).unwrap(), -s.payoff(1).unwrap());
        }
        assert_eq!(state([2, 0], &[Bet, Bet]).payoff(0), Ok(2.));
        assert_eq!(state([2, 0], &[Pass, Bet, Pass]).payoff(0), Ok(-1.));
    }

    #[test]
    fn keys_hide_opponent_card() {
        assert_eq!(state([2, 0], &[]).key(), Ok("K:".to_string()));
        assert_eq!(state([2, 0], &[Bet]).key(), Ok("J:b".to_string()));
        assert_eq!(state([1, 0], &[Bet]).key(), state([2, 0], &[Bet]).key());
        assert!(state([1, 0], &[Bet, Pass]).key().is_err());
    }

    #[test]
    fn no_moves_after_the_end() {
        assert!(state([0, 1], &[Bet, Pass]).apply(&Bet).is_err());
        assert!(state([0, 1], &[Bet]).payoff(0).is_err());
    }
}

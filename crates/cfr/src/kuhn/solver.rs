//! Kuhn poker convergence tests.
//!
//! The first player's equilibrium value is −1/18. A king facing a bet
//! always calls and a jack facing a bet always folds, in every equilibrium.

#[cfg(test)]
mod tests {
    use crate::*;
    use trick_core::*;

    /// Exact value of the average strategy profile for the first player,
    /// enumerating all six deals.
    fn value(trainer: &Trainer<Kuhn>) -> Utility {
        fn walk(trainer: &Trainer<Kuhn>, state: &KuhnState) -> Utility {
            match state.turn() {
                Turn::Terminal => state.payoff(0).unwrap(),
                Turn::Choice(_) => {
                    let key = state.key().unwrap();
                    state
                        .choices()
                        .iter()
                        .map(|e| {
                            let p = trainer.averaged(&key, e).unwrap_or(0.5);
                            p * walk(trainer, &state.apply(e).unwrap())
                        })
                        .sum()
                }
            }
        }
        let deals = [[0, 1], [0, 2], [1, 0], [1, 2], [2, 0], [2, 1]];
        deals
            .iter()
            .map(|cards| walk(trainer, &KuhnState::from((*cards, vec![]))))
            .sum::<Utility>()
            / deals.len() as Utility
    }

    macro_rules! converges {
        ($($name:ident: $seed:expr;)*) => {
            paste::paste! {
                $(
                    #[test]
                    fn [<converges_seed_ $name>]() {
                        let mut trainer = Trainer::new(Kuhn, TrainerConfig::default().seed($seed));
                        trainer.train(20_000).unwrap();
                        let v = value(&trainer);
                        assert!((v + 1. / 18.).abs() < 0.02, "game value {}", v);
                        let call = trainer.averaged("K:b", &KuhnEdge::Bet).unwrap();
                        assert!(call > 0.95, "king calls {}", call);
                        let fold = trainer.averaged("J:pb", &KuhnEdge::Pass).unwrap();
                        assert!(fold > 0.95, "jack folds {}", fold);
                    }
                )*
            }
        };
    }

    converges! {
        a: 1;
        b: 2;
    }

    #[test]
    fn table_covers_every_decision() {
        let mut trainer = Trainer::new(Kuhn, TrainerConfig::default());
        trainer.train(500).unwrap();
        assert_eq!(trainer.infosets().len(), 12);
        assert!(trainer.infosets().values().all(|i| i.size() == 2));
    }
}

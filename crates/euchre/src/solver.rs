#[cfg(test)]
mod tests {
    use crate::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use trick_cards::*;
    use trick_cfr::*;
    use trick_core::*;

    /// Always deals the same hand, so training sees one deal exhaustively.
    struct Fixed(EuchreState);

    impl CfrGame for Fixed {
        type E = EuchreEdge;
        type S = EuchreState;
        fn players(&self) -> usize {
            SEATS
        }
        fn root<R: rand::Rng + ?Sized>(&self, _: &mut R) -> EuchreState {
            self.0.clone()
        }
    }

    fn small(hand_size: usize, bidding: bool) -> Euchre {
        Euchre::new(EuchreConfig::new(hand_size, bidding).unwrap())
    }

    #[test]
    fn orders_up_with_the_right_bower() {
        let hands = ["Jh", "9c", "As", "Tc"].map(|s| Hand::try_from(s).unwrap());
        let root = EuchreState::bidding(hands, Card::try_from("Qh").unwrap(), 3).unwrap();
        let ref key = root.key().unwrap();
        let mut trainer = Trainer::new(Fixed(root), TrainerConfig::default());
        trainer.train(500).unwrap();
        assert!(trainer.averaged(key, &EuchreEdge::Call(Suit::H)).unwrap() > 0.95);
    }

    macro_rules! trains {
        ($($name:ident: $cards:expr, $bidding:expr;)*) => {
            paste::paste! {
                $(
                    #[test]
                    fn [<trains_ $name>]() {
                        let mut trainer = Trainer::new(small($cards, $bidding), TrainerConfig::default().seed(17));
                        let mean = trainer.train(40).unwrap();
                        assert!(mean.abs() <= 2. * SEATS as Utility);
                        assert_eq!(trainer.epochs(), 40);
                        assert!(!trainer.infosets().is_empty());
                        for (key, info) in trainer.infosets() {
                            let total = info.average().iter().map(|(_, p)| p).sum::<Probability>();
                            assert!((total - 1.).abs() < 1e-6, "{}", key);
                            assert!(matches!(&key[..1], "B" | "D" | "P"));
                        }
                    }
                )*
            }
        };
    }

    trains! {
        one_card_bidding: 1, true;
        one_card_play: 1, false;
        two_card_bidding: 2, true;
        three_card_play: 3, false;
    }

    #[test]
    fn batched_matches_shape() {
        let mut trainer = Trainer::new(small(2, false), TrainerConfig::default().seed(5).batch(4));
        trainer.train_batched(10).unwrap();
        assert!(trainer.infosets().keys().all(|k| k.starts_with("P|")));
        assert!(trainer.infosets().values().all(|i| i.visits() > 0));
    }

    #[test]
    fn blueprint_plays_its_own_game() {
        let mut trainer = Trainer::new(small(1, true), TrainerConfig::default().seed(3).skip_forced(true));
        trainer.train(200).unwrap();
        let blueprint = Blueprint::from(&trainer);
        assert_eq!(blueprint.size(), trainer.infosets().len());
        let ref mut rng = SmallRng::seed_from_u64(10);
        let mut agents: Vec<Box<dyn Agent<EuchreState>>> = vec![
            Box::new(blueprint.clone()),
            Box::new(Uniform),
            Box::new(blueprint),
            Box::new(Uniform),
        ];
        let payoffs = play(trainer.game(), &mut agents, 200, rng).unwrap();
        assert_eq!(payoffs[0], payoffs[2]);
        assert!((payoffs[0] + payoffs[1]).abs() < PROBABILITY_EPSILON);
    }
}

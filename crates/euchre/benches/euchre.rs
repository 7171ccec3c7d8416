use rand::SeedableRng;
use rand::rngs::SmallRng;
use trick_cfr::*;
use trick_euchre::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        dealing_full_hand,
        simulating_full_hand,
        determinizing_first_lead,
        scoring_first_lead,
        training_two_card_hands,
        training_two_card_batches,
}

fn game(hand_size: usize, bidding: bool) -> Euchre {
    Euchre::new(EuchreConfig::new(hand_size, bidding).unwrap())
}

fn dealing_full_hand(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let game = Euchre::default();
    c.bench_function("deal a 5-card Euchre hand", |b| b.iter(|| game.root(rng)));
}

fn simulating_full_hand(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let root = Euchre::default().root(rng);
    c.bench_function("play out a 5-card hand at random", |b| {
        b.iter(|| simulate(&root, rng).unwrap())
    });
}

fn determinizing_first_lead(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let root = game(5, false).root(rng);
    c.bench_function("redeal hidden cards before the first lead", |b| {
        b.iter(|| determinize(&root, rng).unwrap())
    });
}

fn scoring_first_lead(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let root = game(5, false).root(rng);
    c.bench_function("score the first lead with 100 rollouts", |b| {
        b.iter(|| score(&root, 100, rng).unwrap())
    });
}

fn training_two_card_hands(c: &mut criterion::Criterion) {
    c.bench_function("train 10 iterations of 2-card Euchre", |b| {
        b.iter(|| {
            let mut trainer = Trainer::new(game(2, true), TrainerConfig::default());
            trainer.train(10).unwrap()
        })
    });
}

fn training_two_card_batches(c: &mut criterion::Criterion) {
    c.bench_function("train 10 batched iterations of 2-card Euchre", |b| {
        b.iter(|| {
            let mut trainer = Trainer::new(game(2, true), TrainerConfig::default().batch(8));
            trainer.train_batched(10).unwrap()
        })
    });
}

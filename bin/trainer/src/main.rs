//! Trainer Binary
//!
//! Subcommands: train, score, arena

mod cli;

use cli::Command;
use cli::Deal;
use cli::Opponent;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use trick_cfr::*;
use trick_euchre::*;

fn main() -> anyhow::Result<()> {
    trick_core::log()?;
    trick_core::brb();
    match Command::parse() {
        Command::Train {
            deal,
            iterations,
            batch,
            skip_forced,
            show,
        } => {
            let config = TrainerConfig::default()
                .seed(deal.seed)
                .skip_forced(skip_forced)
                .batch(batch);
            let trainer = train(game(&deal)?, config, iterations)?;
            log::info!("{}", trainer.metrics().summary());
            let mut infos = trainer.infosets().iter().collect::<Vec<_>>();
            infos.sort_by(|(a, x), (b, y)| y.visits().cmp(&x.visits()).then(a.cmp(b)));
            for (key, info) in infos.into_iter().take(show) {
                let average = info
                    .average()
                    .into_iter()
                    .map(|(edge, p)| format!("{} {:.3}", edge, p))
                    .collect::<Vec<_>>()
                    .join("  ");
                println!("{:<40} {:>8}  {}", key, info.visits(), average);
            }
        }
        Command::Score { deal, samples } => {
            let ref mut rng = SmallRng::seed_from_u64(deal.seed);
            let root = game(&deal)?.root(rng);
            println!("{}", root);
            println!("seat {} to act", root.actor().unwrap_or_default());
            for (edge, value) in score(&root, samples, rng)? {
                println!("{:>12} {:+.4}", edge.to_string(), value);
            }
        }
        Command::Arena {
            deal,
            iterations,
            hands,
            against,
        } => {
            let trainer = train(game(&deal)?, TrainerConfig::default().seed(deal.seed), iterations)?;
            let blueprint = Blueprint::from(&trainer);
            let mut agents: Vec<Box<dyn Agent<EuchreState>>> = vec![
                Box::new(blueprint.clone()),
                opponent(against),
                Box::new(blueprint),
                opponent(against),
            ];
            let ref mut rng = SmallRng::seed_from_u64(deal.seed.wrapping_add(1));
            let payoffs = play(trainer.game(), &mut agents, hands, rng)?;
            log::info!(
                "blueprint {:+.4} {:?} {:+.4} over {} hands",
                payoffs[0],
                against,
                payoffs[1],
                hands
            );
        }
    }
    Ok(())
}

fn game(deal: &Deal) -> anyhow::Result<Euchre> {
    Ok(Euchre::new(EuchreConfig::new(deal.cards, !deal.no_bidding)?))
}

fn opponent(against: Opponent) -> Box<dyn Agent<EuchreState>> {
    match against {
        Opponent::Uniform => Box::new(Uniform),
        Opponent::Rollout => Box::new(Rollout::default()),
        Opponent::Resolver => Box::new(Resolver::default()),
        Opponent::Oracle => Box::new(Oracle),
    }
}

fn train(game: Euchre, config: TrainerConfig, iterations: usize) -> anyhow::Result<Trainer<Euchre>> {
    let mut trainer = Trainer::new(game, config);
    match trainer.config().batch > 1 {
        true => trainer.train_batched(iterations)?,
        false => trainer.train(iterations)?,
    };
    Ok(trainer)
}

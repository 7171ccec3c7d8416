use clap::Args;
use clap::Parser;
use clap::ValueEnum;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    #[command(about = "Train average strategies by vanilla CFR")]
    Train {
        #[command(flatten)]
        deal: Deal,
        #[arg(long, default_value_t = 1000)]
        iterations: usize,
        #[arg(long, default_value_t = 1, help = "roots per player per batched iteration")]
        batch: usize,
        #[arg(long, help = "walk through single-action nodes without storing them")]
        skip_forced: bool,
        #[arg(long, default_value_t = 10, help = "most visited information sets to print")]
        show: usize,
    },
    #[command(about = "Score the first decision of a random deal by rollouts")]
    Score {
        #[command(flatten)]
        deal: Deal,
        #[arg(long, default_value_t = trick_core::ROLLOUT_SAMPLES)]
        samples: usize,
    },
    #[command(about = "Train, then seat the blueprint against another agent")]
    Arena {
        #[command(flatten)]
        deal: Deal,
        #[arg(long, default_value_t = 1000)]
        iterations: usize,
        #[arg(long, default_value_t = 10000)]
        hands: usize,
        #[arg(long, value_enum, default_value_t = Opponent::Uniform)]
        against: Opponent,
    },
}

/// Agents that can sit across from the blueprint.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Opponent {
    Uniform,
    Rollout,
    Resolver,
    Oracle,
}

/// Shape of every hand dealt.
#[derive(Args)]
pub struct Deal {
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    #[arg(long, default_value_t = 2, help = "cards dealt to each seat, 1 to 5")]
    pub cards: usize,
    #[arg(long, help = "fix trump to the upcard and skip bidding")]
    pub no_bidding: bool,
}

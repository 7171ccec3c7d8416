//! Euchre as an extensive-form game for [`trick_cfr`].
//!
//! Four seats in two fixed partnerships play one hand: optional two-round
//! bidding for trump, the dealer's discard after an order-up, then tricks
//! under follow-suit. Card plays are abstracted through
//! [`trick_cards::representatives`] so that interchangeable cards share one
//! action.
//!
//! ## Game
//!
//! - [`Euchre`]: Deals random roots under an [`EuchreConfig`]
//! - [`EuchreState`]: One hand in progress, with its information-set key
//! - [`EuchreEdge`]: Pass, call, discard, or play
//!
//! ## Rollouts
//!
//! - [`determinize`]: Redeal hidden cards consistent with the actor's view
//! - [`score`]: Monte Carlo value of each legal action
//! - [`Rollout`]: Agent that plays the best-scoring action
//!
//! ## Search
//!
//! - [`Resolver`]: Fresh CFR over determinized [`Worlds`] at every decision
//! - [`Oracle`]: Perfect-information alpha-beta, a ceiling for the arena
mod agent;
mod config;
mod edge;
mod game;
mod oracle;
mod phase;
mod resolver;
mod rollout;
mod solver;
mod state;

pub use agent::*;
pub use config::*;
pub use edge::*;
pub use game::*;
pub use oracle::*;
pub use phase::*;
pub use resolver::*;
pub use rollout::*;
pub use state::*;

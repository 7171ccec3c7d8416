//! Kuhn poker as a minimal CFR test case.
//!
//! Small enough to enumerate exactly, with a known equilibrium value, so it
//! checks the trainer end to end independently of any card-game rules.
//!
//! - [`KuhnEdge`]: `CfrEdge`: pass or bet
//! - [`KuhnState`]: `CfrState`: cards plus betting line
//! - [`Kuhn`]: `CfrGame`: deals two of three cards

mod edge;
mod game;
mod solver;
mod state;

pub use edge::*;
pub use game::*;
pub use state::*;

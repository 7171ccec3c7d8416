//! Game-agnostic counterfactual regret minimization.
//!
//! The trainer depends only on [`CfrGame`] and [`CfrState`], so any
//! extensive-form game that can deal a random root can be solved.
//!
//! # Module Structure
//!
//! - `state`: Game contract (Turn, Edge, State, Game)
//! - `strategy`: Information sets and regret matching
//! - `solver`: Vanilla and batched training loops
//! - `metrics`: Training observability
//! - `agent`: Action selection and head-to-head play
//! - `kuhn`: Kuhn poker reference implementation

mod agent;
mod kuhn;
mod metrics;
mod solver;
mod state;
mod strategy;

pub use agent::*;
pub use kuhn::*;
pub use metrics::*;
pub use solver::*;
pub use state::*;
pub use strategy::*;

//! Action-selection front ends and head-to-head evaluation.

mod agent;
mod arena;
mod blueprint;
mod uniform;

pub use agent::*;
pub use arena::*;
pub use blueprint::*;
pub use uniform::*;

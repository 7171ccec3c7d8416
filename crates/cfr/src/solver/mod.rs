//! CFR training algorithm and utilities.
//!
//! - Trainer: owns the information-set table and runs the recursive walk
//! - Counterfactual: per-key deltas from read-only batched walks
//! - TrainerConfig: seed and traversal options

mod batch;
mod config;
mod counterfactual;
mod trainer;

pub use batch::*;
pub use config::*;
pub use counterfactual::*;
pub use trainer::*;

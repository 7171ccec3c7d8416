//! Core type aliases, errors, and constants for trick-taking CFR.
//!
//! Every other crate in the workspace builds on these primitives.

mod error;
#[cfg(feature = "server")]
mod runtime;

pub use error::*;
#[cfg(feature = "server")]
pub use runtime::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index around the table.
pub type Position = usize;
/// Expected values, regrets, and payoffs.
pub type Utility = f64;
/// Strategy weights, sampling distributions, and reach probabilities.
pub type Probability = f64;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Seats at a Euchre table, partnered across.
pub const SEATS: usize = 4;
/// Two partnerships: seats 0 and 2, seats 1 and 3.
pub const TEAMS: usize = 2;
/// Cards dealt to each seat in a full hand.
pub const HAND_SIZE: usize = 5;
/// Cards set aside in the kitty.
pub const KITTY_SIZE: usize = 4;
/// Bidding turns before the dealer is forced to call.
pub const BIDDING_TURNS: usize = 2 * SEATS;

// ============================================================================
// MONTE CARLO ROLLOUTS
// Determinized self-play used to score actions for a human at the table.
// ============================================================================
/// Total rollouts split evenly across the legal actions being scored.
pub const ROLLOUT_SAMPLES: usize = 1000;
/// Attempts at dealing hidden cards consistent with known voids.
pub const ROLLOUT_RETRIES: usize = 64;

// ============================================================================
// ONLINE RESOLVING
// A fresh CFR solve over determinized copies of each decision.
// ============================================================================
/// Determinized worlds sampled per decision.
pub const RESOLVER_WORLDS: usize = 16;
/// CFR iterations over those worlds per decision.
pub const RESOLVER_ITERATIONS: usize = 100;

// ============================================================================
// TRAINING INFRASTRUCTURE
// ============================================================================
/// Interval between progress log messages during training.
pub const TRAINING_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);
/// Tolerance for probability mass checks.
pub const PROBABILITY_EPSILON: Probability = 1e-9;

/// Always false without the `server` runtime.
#[cfg(not(feature = "server"))]
pub fn interrupted() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shape() {
        assert_eq!(SEATS * HAND_SIZE + KITTY_SIZE, 24);
        assert_eq!(BIDDING_TURNS, 8);
    }
}

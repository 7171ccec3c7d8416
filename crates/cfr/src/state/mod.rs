//! State primitives for extensive-form games.
//!
//! - Turn types (player or terminal)
//! - Edge types (actions/transitions)
//! - Game rules and tree nodes

mod edge;
mod game;
mod state;
mod turn;

pub use edge::*;
pub use game::*;
pub use state::*;
pub use turn::*;

//! Strategy representation: per-key accumulators and regret matching.

mod encounter;
mod infoset;

pub use encounter::*;
pub use infoset::*;

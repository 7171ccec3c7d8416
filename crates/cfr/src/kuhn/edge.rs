use crate::*;

/// Actions in Kuhn poker: check or fold, and bet or call.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum KuhnEdge {
    /// Check when no bet is pending, fold when facing one.
    Pass,
    /// Bet when no bet is pending, call when facing one.
    Bet,
}

impl CfrEdge for KuhnEdge {}

impl std::fmt::Display for KuhnEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "p"),
            Self::Bet => write!(f, "b"),
        }
    }
}

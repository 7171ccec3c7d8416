use trick_core::Position;

/// Who moves next.
///
/// Chance is resolved when a root is dealt, never mid-tree, so a node is
/// either some seat's decision or a terminal payoff.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Turn {
    Choice(Position),
    Terminal,
}

impl Turn {
    pub fn actor(&self) -> Option<Position> {
        match self {
            Self::Choice(p) => Some(*p),
            Self::Terminal => None,
        }
    }
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(p) => write!(f, "P{}", p),
            Self::Terminal => write!(f, "--"),
        }
    }
}

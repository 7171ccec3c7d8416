/// Contract violations raised by game engines and the CFR machinery.
///
/// None of these are recoverable at the point they are raised. They
/// propagate to the top of the training or interaction loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CfrError {
    /// An action outside the current legal set was submitted to a transition.
    IllegalAction(String),
    /// An operation was invoked where the rules of the game leave it undefined,
    /// e.g. ranking cards before trump is called or reading a payoff mid-hand.
    InvalidState(String),
    /// An action was looked up in an information set that never offered it.
    UnknownAction(String),
}

impl std::fmt::Display for CfrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalAction(msg) => write!(f, "illegal action: {}", msg),
            Self::InvalidState(msg) => write!(f, "invalid state: {}", msg),
            Self::UnknownAction(msg) => write!(f, "unknown action: {}", msg),
        }
    }
}

impl std::error::Error for CfrError {}

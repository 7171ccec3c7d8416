use trick_core::*;

/// Shape of the hand being trained or played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EuchreConfig {
    hand_size: usize,
    bidding: bool,
}

impl Default for EuchreConfig {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            bidding: true,
        }
    }
}

impl EuchreConfig {
    /// Smaller hands shrink the tree enough for exhaustive training.
    pub fn new(hand_size: usize, bidding: bool) -> Result<Self, CfrError> {
        match hand_size {
            1..=HAND_SIZE => Ok(Self { hand_size, bidding }),
            n => Err(CfrError::InvalidState(format!(
                "hand size {} outside 1..={}",
                n, HAND_SIZE
            ))),
        }
    }
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }
    /// Whether trump is bid for, or fixed by the upcard with a random caller.
    pub fn bidding(&self) -> bool {
        self.bidding
    }
}

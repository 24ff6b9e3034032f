use std::fmt;

use serde::{Deserialize, Serialize};

use super::contribution::Contribution;
use crate::model::constants::BEST_COUNTED;

/// Position of a play in the result, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Phi(usize),
    Best(usize)
}

impl Slot {
    /// Best slots past the counted prefix are shown but do not enter the rating.
    pub fn is_overflow(&self) -> bool {
        match self {
            Slot::Phi(_) => false,
            Slot::Best(rank) => *rank > BEST_COUNTED
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Phi(rank) => write!(f, "P{}", rank),
            Slot::Best(rank) => write!(f, "B{}", rank)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPlay {
    pub slot: Slot,
    pub contribution: Contribution
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RatingResult {
    /// Unrounded rating
    pub rating: f64,
    /// Top phi plays, at most `PHI_SLOTS`
    pub phi: Vec<RankedPlay>,
    /// Top plays overall including overflow, at most `BEST_SLOTS`
    pub best: Vec<RankedPlay>
}

impl RatingResult {
    /// The best plays that enter the rating sum
    pub fn counted_best(&self) -> impl Iterator<Item = &RankedPlay> {
        self.best.iter().filter(|p| !p.slot.is_overflow())
    }

    pub fn overflow(&self) -> impl Iterator<Item = &RankedPlay> {
        self.best.iter().filter(|p| p.slot.is_overflow())
    }
}

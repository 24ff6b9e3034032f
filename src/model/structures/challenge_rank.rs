use serde::{Deserialize, Serialize};
use std::fmt;

/// Badge colour of a challenge mode rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeColor {
    Grey,
    Green,
    Blue,
    Red,
    Gold,
    Rainbow
}

/// Challenge mode rank as stored in the save summary, e.g. `348` is Red 48.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRank {
    pub color: ChallengeColor,
    pub level: u32
}

impl ChallengeRank {
    pub fn from_encoded(rank: u32) -> ChallengeRank {
        let color = match rank / 100 {
            1 => ChallengeColor::Green,
            2 => ChallengeColor::Blue,
            3 => ChallengeColor::Red,
            4 => ChallengeColor::Gold,
            5 => ChallengeColor::Rainbow,
            _ => ChallengeColor::Grey
        };

        ChallengeRank {
            color,
            level: rank % 100
        }
    }
}

impl fmt::Display for ChallengeRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.color, self.level)
    }
}

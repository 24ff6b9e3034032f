use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::EnumIter;

use crate::model::constants::MAX_SCORE;

/// Rank icon shown next to a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Grade {
    Phi,
    FullCombo,
    V,
    S,
    A,
    B,
    C,
    F
}

impl Grade {
    pub fn from_play(score: i64, full_combo: bool) -> Grade {
        if score == MAX_SCORE {
            return Grade::Phi;
        }

        if full_combo {
            return Grade::FullCombo;
        }

        match score {
            s if s >= 960_000 => Grade::V,
            s if s >= 920_000 => Grade::S,
            s if s >= 880_000 => Grade::A,
            s if s >= 820_000 => Grade::B,
            s if s >= 700_000 => Grade::C,
            _ => Grade::F
        }
    }

    /// Icon file name used by the rendering layer
    pub fn icon(&self) -> &'static str {
        match self {
            Grade::Phi => "Phi.png",
            Grade::FullCombo => "FC.png",
            Grade::V => "V.png",
            Grade::S => "S.png",
            Grade::A => "A.png",
            Grade::B => "B.png",
            Grade::C => "C.png",
            Grade::F => "F.png"
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::Phi => "φ",
            Grade::FullCombo => "FC",
            Grade::V => "V",
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::F => "F"
        };
        f.write_str(s)
    }
}

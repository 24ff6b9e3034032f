use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// A player's best recorded attempt at one tier of a chart.
///
/// Values are taken as-is from the save; no range checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub score: i64,
    /// Percentage, nominally 0..=100
    pub accuracy: f64,
    pub full_combo: bool
}

impl PlayRecord {
    pub fn new(score: i64, accuracy: f64, full_combo: bool) -> PlayRecord {
        PlayRecord {
            score,
            accuracy,
            full_combo
        }
    }
}

/// Per-tier records of one chart, `None` where the tier was never played.
pub type ChartRecords = [Option<PlayRecord>; Difficulty::COUNT];

/// Records of one player keyed by chart id. Charts never played are absent.
pub type PlayerRecords = HashMap<String, ChartRecords>;

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// Rating credit earned by the best play on one tier of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub chart_id: String,
    pub difficulty: Difficulty,
    pub difficulty_rating: f64,
    pub accuracy: f64,
    pub score: i64,
    pub full_combo: bool,
    pub value: f64,
    /// Accuracy rounds to 100.00, making this play eligible for a P slot
    pub phi: bool
}

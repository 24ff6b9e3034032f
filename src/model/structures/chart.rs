use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// A playable song with up to four difficulty tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub id: String,
    /// Display name, only used by reports
    pub name: Option<String>,
    /// One rating per tier in EZ..AT order. 0.0 means the tier does not exist.
    pub difficulty_ratings: [f64; Difficulty::COUNT]
}

impl Chart {
    pub fn new(id: impl Into<String>, difficulty_ratings: [f64; Difficulty::COUNT]) -> Chart {
        Chart {
            id: id.into(),
            name: None,
            difficulty_ratings
        }
    }

    /// Returns the rating of a tier, or `None` when the tier does not exist.
    pub fn difficulty_rating(&self, difficulty: Difficulty) -> Option<f64> {
        let rating = self.difficulty_ratings[difficulty.index()];

        // NaN and non-positive values fall through as non-existent tiers
        if rating > 0.0 {
            Some(rating)
        } else {
            None
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Chart catalog keyed by chart id. Insertion order follows the source file.
pub type Catalog = IndexMap<String, Chart>;

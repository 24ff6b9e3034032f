use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::model::{
    constants::ACCURACY_FLOOR,
    contribution::is_phi,
    structures::{chart::Catalog, difficulty::Difficulty, play_record::PlayerRecords}
};

/// Per-tier completion counts shown in the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    /// Plays at or above the accuracy floor
    pub cleared: [u32; Difficulty::COUNT],
    pub full_combo: [u32; Difficulty::COUNT],
    pub phi: [u32; Difficulty::COUNT]
}

impl Progress {
    pub fn rows(&self) -> [(&'static str, &[u32; Difficulty::COUNT]); 3] {
        [("C", &self.cleared), ("FC", &self.full_combo), ("AT", &self.phi)]
    }
}

/// Tallies the progress table. Tiers without a difficulty rating are not counted.
pub fn progress(catalog: &Catalog, records: &PlayerRecords) -> Progress {
    let mut progress = Progress::default();

    for chart in catalog.values() {
        let Some(chart_records) = records.get(&chart.id) else {
            continue;
        };

        for difficulty in Difficulty::iter() {
            let i = difficulty.index();
            let Some(record) = &chart_records[i] else {
                continue;
            };

            if chart.difficulty_rating(difficulty).is_none() {
                continue;
            }

            progress.cleared[i] += u32::from(record.accuracy >= ACCURACY_FLOOR);
            progress.full_combo[i] += u32::from(record.full_combo);
            progress.phi[i] += u32::from(is_phi(record.accuracy));
        }
    }

    progress
}

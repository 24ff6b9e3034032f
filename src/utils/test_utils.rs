use crate::model::structures::{
    chart::{Catalog, Chart},
    difficulty::Difficulty,
    play_record::{ChartRecords, PlayRecord, PlayerRecords}
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn generate_catalog(entries: &[(&str, [f64; Difficulty::COUNT])]) -> Catalog {
    generate_catalog_owned(entries.iter().map(|(id, ratings)| (id.to_string(), *ratings)).collect())
}

pub fn generate_catalog_owned(entries: Vec<(String, [f64; Difficulty::COUNT])>) -> Catalog {
    entries
        .into_iter()
        .map(|(id, ratings)| (id.clone(), Chart::new(id, ratings)))
        .collect()
}

/// Records with only `difficulty` played
pub fn tier_record(difficulty: Difficulty, record: PlayRecord) -> ChartRecords {
    let mut records: ChartRecords = [None; Difficulty::COUNT];
    records[difficulty.index()] = Some(record);

    records
}

/// A single play on one tier. Score and full combo follow the accuracy loosely.
pub fn single_record(id: &str, difficulty: Difficulty, accuracy: f64) -> PlayerRecords {
    let score = (accuracy * 10_000.0) as i64;
    let record = PlayRecord::new(score, accuracy, accuracy >= 100.0);

    PlayerRecords::from([(id.to_string(), tier_record(difficulty, record))])
}

/// Seeded random records for every existing tier of the catalog. Some tiers are left
/// unplayed and some accuracies fall below the floor.
pub fn generate_records(catalog: &Catalog, seed: u64) -> PlayerRecords {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut records = PlayerRecords::new();

    for chart in catalog.values() {
        let mut chart_records: ChartRecords = [None; Difficulty::COUNT];

        for (i, rating) in chart.difficulty_ratings.iter().enumerate() {
            if *rating <= 0.0 || rng.random_bool(0.2) {
                continue;
            }

            let accuracy = if rng.random_bool(0.25) {
                100.0
            } else {
                rng.random_range(50.0..100.0)
            };
            let score = (accuracy * 10_000.0) as i64;

            chart_records[i] = Some(PlayRecord::new(score, accuracy, rng.random_bool(0.3)));
        }

        records.insert(chart.id.clone(), chart_records);
    }

    records
}

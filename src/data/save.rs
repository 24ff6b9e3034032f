use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    data::error::DataError,
    model::structures::{
        difficulty::Difficulty,
        play_record::{ChartRecords, PlayRecord, PlayerRecords}
    }
};

const FIELDS_PER_TIER: usize = 3;

/// Decoded save as produced by the external save-file decoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveExport {
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub summary: Summary,
    /// Chart id to `[score, accuracy, full_combo]` triples in EZ..AT order
    #[serde(default)]
    pub game_record: HashMap<String, Vec<Value>>,
    #[serde(default)]
    pub game_progress: GameProgress,
    #[serde(default)]
    pub user: User
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Summary {
    pub save_version: u32,
    pub challenge_mode_rank: u32,
    /// Rating as stored by the game client
    pub ranking_score: f64,
    pub game_version: u32
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameProgress {
    /// Data amount in `[KiB, MiB, GiB, TiB, PiB]`
    pub money: [u64; 5]
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub avatar: String
}

impl SaveExport {
    pub fn from_json(json: &str) -> Result<SaveExport, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<SaveExport, DataError> {
        info!("Loading save export from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;

        SaveExport::from_json(&content)
    }

    /// Normalizes the raw game records. Tiers with a missing score or accuracy are absent.
    pub fn records(&self) -> PlayerRecords {
        self.game_record
            .iter()
            .map(|(id, fields)| (id.clone(), chart_records(id, fields)))
            .collect()
    }
}

fn chart_records(id: &str, fields: &[Value]) -> ChartRecords {
    let mut records: ChartRecords = [None; Difficulty::COUNT];

    for (i, tier) in fields.chunks(FIELDS_PER_TIER).take(Difficulty::COUNT).enumerate() {
        records[i] = tier_record(tier);

        if records[i].is_none() && tier.iter().any(|v| !v.is_null()) {
            warn!(chart = id, tier = i, "Incomplete play record, treating the tier as unplayed");
        }
    }

    records
}

fn tier_record(tier: &[Value]) -> Option<PlayRecord> {
    let score = tier.first().and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))?;
    let accuracy = tier.get(1).and_then(Value::as_f64)?;
    let full_combo = match tier.get(2) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false
    };

    Some(PlayRecord::new(score, accuracy, full_combo))
}

/// Formats the data amount from the largest non-zero unit down to KiB,
/// e.g. `1GiB 0MiB 12KiB`.
pub fn format_data_amount(money: &[u64; 5]) -> String {
    const UNITS: [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];

    let top = money.iter().rposition(|&v| v != 0).unwrap_or(0);

    (0..=top)
        .rev()
        .map(|i| format!("{}{}", money[i], UNITS[i]))
        .collect::<Vec<_>>()
        .join(" ")
}

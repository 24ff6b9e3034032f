use std::{fs, path::Path};

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::{
    data::error::DataError,
    model::{
        progress::Progress,
        structures::{
            challenge_rank::ChallengeRank,
            chart::Catalog,
            grade::Grade,
            rating_result::RankedPlay
        }
    },
    report::{round_to, Report}
};

/// JSON document consumed by the rendering layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub nickname: String,
    pub avatar: String,
    /// Rounded to 4 decimals
    pub rks: f64,
    pub in_game_rks: f64,
    pub challenge_rank: ChallengeRank,
    pub data: String,
    pub updated_at: DateTime<FixedOffset>,
    pub progress: Progress,
    pub phi: Vec<PlayEntry>,
    pub best: Vec<PlayEntry>
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEntry {
    pub label: String,
    pub chart_id: String,
    pub name: String,
    pub difficulty: &'static str,
    pub difficulty_rating: f64,
    pub accuracy: f64,
    pub score: i64,
    pub value: f64,
    pub full_combo: bool,
    pub grade: Grade,
    pub icon: &'static str,
    /// Shown but not part of the rating
    pub overflow: bool
}

impl PlayEntry {
    fn new(play: &RankedPlay, catalog: &Catalog) -> PlayEntry {
        let c = &play.contribution;
        let grade = Grade::from_play(c.score, c.full_combo);

        PlayEntry {
            label: play.slot.to_string(),
            chart_id: c.chart_id.clone(),
            name: catalog
                .get(&c.chart_id)
                .map_or_else(|| c.chart_id.clone(), |chart| chart.display_name().to_string()),
            difficulty: c.difficulty.name(),
            difficulty_rating: c.difficulty_rating,
            accuracy: c.accuracy,
            score: c.score,
            value: c.value,
            full_combo: c.full_combo,
            grade,
            icon: grade.icon(),
            overflow: play.slot.is_overflow()
        }
    }
}

impl ReportDocument {
    pub fn new(report: &Report, catalog: &Catalog) -> ReportDocument {
        let entries = |plays: &[RankedPlay]| -> Vec<PlayEntry> {
            plays.iter().map(|p| PlayEntry::new(p, catalog)).collect()
        };

        ReportDocument {
            nickname: report.nickname.clone(),
            avatar: report.avatar.clone(),
            rks: round_to(report.result.rating, 4),
            in_game_rks: report.in_game_rks,
            challenge_rank: report.challenge_rank,
            data: report.data_amount.clone(),
            updated_at: report.updated_at,
            progress: report.progress,
            phi: entries(&report.result.phi),
            best: entries(&report.result.best)
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn write(&self, path: &Path) -> Result<(), DataError> {
        let json = self.to_json().map_err(DataError::Report)?;

        fs::write(path, json).map_err(|e| DataError::io(path, e))
    }
}

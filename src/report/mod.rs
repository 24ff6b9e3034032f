use chrono::{DateTime, FixedOffset};
use tracing::info;

use crate::{
    data::save::{format_data_amount, SaveExport},
    model::{
        progress::{progress, Progress},
        rks_model::calculate_rks,
        structures::{chart::Catalog, challenge_rank::ChallengeRank, rating_result::RatingResult}
    }
};

pub mod document;
pub mod text;

/// Everything the summary outputs need, computed once per save.
#[derive(Debug, Clone)]
pub struct Report {
    pub nickname: String,
    pub avatar: String,
    pub save_version: u32,
    pub game_version: u32,
    /// Rating stored by the game client, shown for comparison
    pub in_game_rks: f64,
    pub challenge_rank: ChallengeRank,
    pub data_amount: String,
    pub updated_at: DateTime<FixedOffset>,
    pub result: RatingResult,
    pub progress: Progress
}

impl Report {
    pub fn build(catalog: &Catalog, save: &SaveExport, updated_at: DateTime<FixedOffset>) -> Report {
        let records = save.records();
        let result = calculate_rks(catalog, &records);
        let progress = progress(catalog, &records);

        info!(
            "RKS for {}: {:.4} ({} phi, {} best)",
            save.nickname,
            result.rating,
            result.phi.len(),
            result.best.len()
        );

        Report {
            nickname: save.nickname.clone(),
            avatar: save.user.avatar.clone(),
            save_version: save.summary.save_version,
            game_version: save.summary.game_version,
            in_game_rks: save.summary.ranking_score,
            challenge_rank: ChallengeRank::from_encoded(save.summary.challenge_mode_rank),
            data_amount: format_data_amount(&save.game_progress.money),
            updated_at,
            result,
            progress
        }
    }
}

/// Rounds for display only.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);

    (value * factor).round() / factor
}

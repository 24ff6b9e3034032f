use std::cmp::Ordering;

use itertools::Itertools;
use tracing::{debug, info};

use crate::model::{
    constants::{BEST_COUNTED, BEST_SLOTS, PHI_SLOTS, RATING_DIVISOR},
    contribution::contributions,
    structures::{
        chart::Catalog,
        contribution::Contribution,
        play_record::PlayerRecords,
        rating_result::{RankedPlay, RatingResult, Slot}
    }
};

/// # RKS calculation
///
/// Computes the rating of a player and the plays that justify it.
///
/// Steps:
/// 1. Score every played tier that exists in the catalog.
/// 2. Rank all scored plays (the general pool) and, separately, the phi plays.
///     Phi plays stay in the general pool as well.
/// 3. Keep the top [`PHI_SLOTS`] phi plays and the top [`BEST_SLOTS`] general plays.
/// 4. Sum the top [`BEST_COUNTED`] general plays and the kept phi plays, then divide by
///     [`RATING_DIVISOR`]. The divisor is fixed even when fewer plays exist.
pub fn calculate_rks(catalog: &Catalog, records: &PlayerRecords) -> RatingResult {
    let scored = contributions(catalog, records);
    info!("Scored {} plays across {} charts", scored.len(), records.len());

    select(scored)
}

/// Ranks and buckets a set of contributions into a [`RatingResult`].
pub fn select(contributions: Vec<Contribution>) -> RatingResult {
    let general = contributions
        .into_iter()
        .filter(|c| c.value > 0.0)
        .sorted_by(rank_order)
        .collect_vec();

    let phi = general
        .iter()
        .filter(|c| c.phi)
        .take(PHI_SLOTS)
        .cloned()
        .enumerate()
        .map(|(i, contribution)| RankedPlay {
            slot: Slot::Phi(i + 1),
            contribution
        })
        .collect_vec();

    let rating = rating(&general, &phi);
    debug!(general = general.len(), phi = phi.len(), rating, "Selected plays");

    let best = general
        .into_iter()
        .take(BEST_SLOTS)
        .enumerate()
        .map(|(i, contribution)| RankedPlay {
            slot: Slot::Best(i + 1),
            contribution
        })
        .collect_vec();

    RatingResult { rating, phi, best }
}

/// Descending by value. Equal values fall back to chart id, then tier, both ascending,
/// so the ranking does not depend on input order.
fn rank_order(a: &Contribution, b: &Contribution) -> Ordering {
    b.value
        .total_cmp(&a.value)
        .then_with(|| a.chart_id.cmp(&b.chart_id))
        .then_with(|| a.difficulty.cmp(&b.difficulty))
}

fn rating(ranked_general: &[Contribution], phi: &[RankedPlay]) -> f64 {
    let best_sum: f64 = ranked_general.iter().take(BEST_COUNTED).map(|c| c.value).sum();
    let phi_sum: f64 = phi.iter().map(|p| p.contribution.value).sum();

    (best_sum + phi_sum) / RATING_DIVISOR
}

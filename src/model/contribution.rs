use strum::IntoEnumIterator;
use tracing::{debug, warn};

use crate::{
    model::{
        constants::{ACCURACY_FLOOR, ACCURACY_ORIGIN, ACCURACY_SPAN, PHI_ACCURACY},
        structures::{
            chart::{Catalog, Chart},
            contribution::Contribution,
            difficulty::Difficulty,
            play_record::{ChartRecords, PlayRecord, PlayerRecords}
        }
    },
    utils::progress_utils::progress_bar
};

/// Rating credit of a play with `accuracy` on a tier rated `difficulty_rating`.
///
/// Zero below [`ACCURACY_FLOOR`], otherwise rises quadratically from
/// [`ACCURACY_ORIGIN`] and reaches `difficulty_rating` at 100%.
pub fn contribution_value(difficulty_rating: f64, accuracy: f64) -> f64 {
    if accuracy < ACCURACY_FLOOR {
        return 0.0;
    }

    ((accuracy - ACCURACY_ORIGIN) / ACCURACY_SPAN).powi(2) * difficulty_rating
}

/// Accuracy rounds to 100.00 at two decimals.
///
/// Compared on the rounded accuracy instead of `value == difficulty_rating`,
/// which drifts under float representation error.
pub fn is_phi(accuracy: f64) -> bool {
    (accuracy * 100.0).round() == PHI_ACCURACY * 100.0
}

/// Builds the contribution of one tier. `None` when the tier does not exist,
/// was never played, or earns nothing.
pub fn contribution(chart: &Chart, difficulty: Difficulty, record: &PlayRecord) -> Option<Contribution> {
    let difficulty_rating = chart.difficulty_rating(difficulty)?;
    let value = contribution_value(difficulty_rating, record.accuracy);

    // Also rejects NaN from malformed accuracies
    if !(value > 0.0) {
        return None;
    }

    Some(Contribution {
        chart_id: chart.id.clone(),
        difficulty,
        difficulty_rating,
        accuracy: record.accuracy,
        score: record.score,
        full_combo: record.full_combo,
        value,
        phi: is_phi(record.accuracy)
    })
}

fn chart_contributions(chart: &Chart, records: &ChartRecords) -> Vec<Contribution> {
    Difficulty::iter()
        .filter_map(|difficulty| {
            let record = records[difficulty.index()].as_ref()?;

            if chart.difficulty_rating(difficulty).is_none() {
                warn!(
                    chart = chart.id.as_str(),
                    %difficulty,
                    "Play record on a tier without a difficulty rating, skipping"
                );
                return None;
            }

            contribution(chart, difficulty, record)
        })
        .collect()
}

/// Computes every non-zero contribution of a player, in catalog order.
///
/// Records of charts missing from the catalog are ignored.
pub fn contributions(catalog: &Catalog, records: &PlayerRecords) -> Vec<Contribution> {
    let bar = progress_bar(catalog.len() as u64, "Scoring charts".to_string());
    let mut result = Vec::new();

    for chart in catalog.values() {
        if let Some(chart_records) = records.get(&chart.id) {
            let scored = chart_contributions(chart, chart_records);
            debug!(chart = chart.id.as_str(), n = scored.len(), "Scored chart");
            result.extend(scored);
        }

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    for id in records.keys().filter(|id| !catalog.contains_key(*id)) {
        warn!(chart = id.as_str(), "Record for a chart missing from the catalog, skipping");
    }

    result
}

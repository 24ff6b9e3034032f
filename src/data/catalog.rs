use std::{fs, path::Path};

use tracing::{debug, info, warn};

use crate::{
    data::error::DataError,
    model::structures::{
        chart::{Catalog, Chart},
        difficulty::Difficulty
    }
};

const DIFFICULTY_TABLE: &str = "difficulty table";
const INFO_TABLE: &str = "info table";

/// Parses a difficulty table, one chart per line: `id \t EZ \t HD \t IN [\t AT]`.
///
/// Missing or unparsable ratings become 0.0, which marks the tier as non-existent.
pub fn parse_difficulty_table(content: &str) -> Result<Catalog, DataError> {
    let mut catalog = Catalog::new();

    for (n, line) in content.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let mut columns = line.split('\t');
        let id = columns.next().unwrap_or_default().trim();
        let ratings: Vec<&str> = columns.collect();

        if id.is_empty() || ratings.is_empty() {
            return Err(DataError::MalformedLine {
                table: DIFFICULTY_TABLE,
                line: n + 1,
                reason: "expected a chart id followed by difficulty ratings".to_string()
            });
        }

        if ratings.len() > Difficulty::COUNT {
            warn!(chart = id, "Difficulty table line has extra columns, ignoring them");
        }

        let mut difficulty_ratings = [0.0; Difficulty::COUNT];
        for (i, raw) in ratings.iter().take(Difficulty::COUNT).enumerate() {
            difficulty_ratings[i] = parse_rating(id, raw);
        }

        if catalog
            .insert(id.to_string(), Chart::new(id, difficulty_ratings))
            .is_some()
        {
            warn!(chart = id, "Duplicate chart in difficulty table, keeping the last entry");
        }
    }

    debug!("Parsed {} charts", catalog.len());
    Ok(catalog)
}

fn parse_rating(id: &str, raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }

    match raw.parse::<f64>() {
        Ok(rating) if rating.is_finite() && rating >= 0.0 => rating,
        _ => {
            warn!(chart = id, value = raw, "Unparsable difficulty rating, treating the tier as missing");
            0.0
        }
    }
}

/// Attaches display names from an info table (`id \t name \t ...`) to charts already in
/// the catalog. Returns the number of charts named.
pub fn apply_chart_names(catalog: &mut Catalog, content: &str) -> usize {
    let mut named = 0;

    for line in content.lines() {
        let mut columns = line.trim_end_matches('\r').split('\t');
        let (Some(id), Some(name)) = (columns.next(), columns.next()) else {
            continue;
        };

        match catalog.get_mut(id.trim()) {
            Some(chart) => {
                chart.name = Some(name.trim().to_string());
                named += 1;
            }
            None => debug!(chart = id, "Info entry without difficulty ratings"),
        }
    }

    named
}

/// Loads the catalog from a difficulty table and, optionally, an info table with names.
pub fn load_catalog(difficulty_path: &Path, info_path: Option<&Path>) -> Result<Catalog, DataError> {
    info!("Loading difficulty table from {}", difficulty_path.display());
    let content = fs::read_to_string(difficulty_path).map_err(|e| DataError::io(difficulty_path, e))?;
    let mut catalog = parse_difficulty_table(&content)?;

    if let Some(info_path) = info_path {
        info!("Loading chart names from {}", info_path.display());
        let content = fs::read_to_string(info_path).map_err(|e| DataError::io(info_path, e))?;
        let named = apply_chart_names(&mut catalog, &content);
        info!("Named {} of {} charts", named, catalog.len());
    }

    Ok(catalog)
}

use std::fmt::Write;

use strum::IntoEnumIterator;

use crate::{
    model::{
        constants::BEST_COUNTED,
        structures::{
            chart::Catalog,
            difficulty::Difficulty,
            rating_result::{RankedPlay, Slot}
        }
    },
    report::Report
};

pub const OVERFLOW_SEPARATOR: &str = "----OVERFLOW----";

/// Plain-text summary: save details, progress table, then the P and B lists.
pub fn render(report: &Report, catalog: &Catalog) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = write_header(&mut out, report);
    let _ = write_progress(&mut out, report);
    let _ = write_plays(&mut out, report, catalog);

    out
}

fn write_header(out: &mut String, report: &Report) -> std::fmt::Result {
    writeln!(out, "{}", report.updated_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "Player: {}", report.nickname)?;
    writeln!(out, "Save version: {}", report.save_version)?;
    writeln!(out, "Challenge mode rank: {}", report.challenge_rank)?;
    writeln!(out, "RKS (in game): {}", report.in_game_rks)?;
    writeln!(out, "RKS: {:.4}", report.result.rating)?;
    writeln!(out, "GameVersion: {}", report.game_version)?;
    writeln!(out, "Avatar: {}", report.avatar)?;
    writeln!(out, "Data: {}", report.data_amount)
}

fn write_progress(out: &mut String, report: &Report) -> std::fmt::Result {
    write!(out, "/  ")?;
    for difficulty in Difficulty::iter() {
        write!(out, " {:>4}", difficulty.name())?;
    }
    writeln!(out)?;

    for (label, counts) in report.progress.rows() {
        write!(out, "{:<3}", label)?;
        for count in counts {
            write!(out, " {:>4}", count)?;
        }
        writeln!(out)?;
    }

    writeln!(out)
}

fn write_plays(out: &mut String, report: &Report, catalog: &Catalog) -> std::fmt::Result {
    for play in &report.result.phi {
        writeln!(out, "{}", play_line(play, catalog))?;
    }
    writeln!(out)?;

    for play in &report.result.best {
        if play.slot == Slot::Best(BEST_COUNTED + 1) {
            writeln!(out, "{}", OVERFLOW_SEPARATOR)?;
        }
        writeln!(out, "{}", play_line(play, catalog))?;
    }

    Ok(())
}

/// `B1 Song [IN], ACC: 99.12%, RKS: 15.73/15.9, Score: 991234`
pub fn play_line(play: &RankedPlay, catalog: &Catalog) -> String {
    let c = &play.contribution;
    let name = catalog
        .get(&c.chart_id)
        .map(|chart| chart.display_name())
        .unwrap_or(c.chart_id.as_str());

    format!(
        "{} {} [{}], ACC: {:.2}%, RKS: {:.2}/{:.1}, Score: {}",
        play.slot, name, c.difficulty, c.accuracy, c.value, c.difficulty_rating, c.score
    )
}

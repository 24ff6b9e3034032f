#[path = "../common/mod.rs"]
mod common;

use approx::assert_abs_diff_eq;
use chrono::{TimeZone, Utc};
use rks_processor::{
    args::Args,
    data::{load_catalog, DataError, SaveExport},
    model::{
        rks_model::calculate_rks,
        structures::{difficulty::Difficulty, rating_result::Slot}
    },
    processor::process,
    report::text::OVERFLOW_SEPARATOR
};
use serial_test::serial;

use common::*;

const EXPECTED_RKS: f64 = 3.436_851_229_135_802_7;

fn args(test: &str) -> Args {
    let dir = scratch_dir(test);

    Args {
        difficulty: fixture("difficulty.tsv"),
        info: fixture("info.tsv"),
        no_info: false,
        save: fixture("save.json"),
        output: dir.join("output.txt"),
        json: Some(dir.join("output.json")),
        utc_offset_hours: 8,
        log_level: "warn".to_string()
    }
}

#[test]
fn test_rating_from_fixture() {
    init_test_env();

    let catalog = load_catalog(&fixture("difficulty.tsv"), Some(fixture("info.tsv").as_path())).unwrap();
    let save = SaveExport::load(&fixture("save.json")).unwrap();

    let result = calculate_rks(&catalog, &save.records());

    assert_abs_diff_eq!(result.rating, EXPECTED_RKS, epsilon = 1e-12);

    let best: Vec<(&str, Difficulty)> = result
        .best
        .iter()
        .map(|p| (p.contribution.chart_id.as_str(), p.contribution.difficulty))
        .collect();
    assert_eq!(
        best,
        vec![
            ("Rrharil.TeamGrimoire.0", Difficulty::IN),
            ("Nhelv.Silentroom.0", Difficulty::IN),
            ("Igallta.Se-U-Ra.0", Difficulty::IN),
            ("Rrharil.TeamGrimoire.0", Difficulty::AT),
            ("Igallta.Se-U-Ra.0", Difficulty::HD),
            ("Glaciaxion.SunsetRay.0", Difficulty::IN),
            ("Glaciaxion.SunsetRay.0", Difficulty::HD),
            ("Nhelv.Silentroom.0", Difficulty::EZ),
            ("Glaciaxion.SunsetRay.0", Difficulty::EZ)
        ]
    );

    let phi: Vec<(Slot, &str, f64)> = result
        .phi
        .iter()
        .map(|p| (p.slot, p.contribution.chart_id.as_str(), p.contribution.value))
        .collect();
    assert_eq!(
        phi,
        vec![
            (Slot::Phi(1), "Nhelv.Silentroom.0", 14.8),
            (Slot::Phi(2), "Glaciaxion.SunsetRay.0", 6.0),
            (Slot::Phi(3), "Glaciaxion.SunsetRay.0", 3.5)
        ]
    );
}

#[test]
#[serial]
fn test_process_writes_outputs() {
    init_test_env();
    let args = args("outputs");
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 4, 0, 0).unwrap();

    let report = process(&args, now).unwrap();

    assert_abs_diff_eq!(report.result.rating, EXPECTED_RKS, epsilon = 1e-12);
    assert_eq!(report.progress.cleared, [2, 2, 4, 1]);
    assert_eq!(report.progress.full_combo, [2, 2, 3, 0]);
    assert_eq!(report.progress.phi, [2, 1, 2, 0]);

    let text = std::fs::read_to_string(&args.output).unwrap();
    assert!(text.starts_with("2025-06-01 12:00:00\n"));
    assert!(text.contains("Player: Tester\n"));
    assert!(text.contains("Challenge mode rank: Gold 48\n"));
    assert!(text.contains("RKS: 3.4369\n"));
    assert!(text.contains("Data: 2GiB 7MiB 421KiB\n"));
    assert!(text.contains("P1 Nhelv [IN], ACC: 100.00%, RKS: 14.80/14.8, Score: 1000000\n"));
    assert!(text.contains("B1 Rrhar'il [IN], ACC: 98.91%, RKS: 15.14/15.9, Score: 985012\n"));
    assert!(!text.contains("Unknown.Chart.0"));
    assert!(!text.contains(OVERFLOW_SEPARATOR));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(args.json.as_ref().unwrap()).unwrap()).unwrap();
    assert_eq!(json["rks"].as_f64().unwrap(), 3.4369);
    assert_eq!(json["best"].as_array().unwrap().len(), 9);
    assert_eq!(json["phi"][0]["grade"], "Phi");
    assert_eq!(json["best"][3]["grade"], "A");
    assert_eq!(json["best"][3]["difficulty"], "AT");
    assert_eq!(json["updatedAt"], "2025-06-01T12:00:00+08:00");
}

#[test]
#[serial]
fn test_process_without_info_lists_ids() {
    init_test_env();
    let mut args = args("no-info");
    args.no_info = true;
    args.json = None;

    process(&args, Utc::now()).unwrap();

    let text = std::fs::read_to_string(&args.output).unwrap();
    assert!(text.contains("B1 Rrharil.TeamGrimoire.0 [IN]"));
}

#[test]
#[serial]
fn test_missing_save_is_an_error() {
    init_test_env();
    let mut args = args("missing-save");
    args.save = fixture("does-not-exist.json");

    let err = process(&args, Utc::now()).unwrap_err();

    assert!(matches!(err, DataError::Io { .. }));
    assert!(!args.output.exists());
}

use std::fs;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use tracing::info;

use crate::{
    args::Args,
    data::{load_catalog, DataError, SaveExport},
    report::{document::ReportDocument, text, Report}
};

/// Loads the inputs named by `args`, computes the report and writes every requested output.
pub fn process(args: &Args, now: DateTime<Utc>) -> Result<Report, DataError> {
    let catalog = load_catalog(&args.difficulty, args.info_path())?;
    info!("Catalog loaded with {} charts", catalog.len());

    let save = SaveExport::load(&args.save)?;
    info!("Save loaded for {} with {} played charts", save.nickname, save.game_record.len());

    let report = Report::build(&catalog, &save, now.with_timezone(&utc_offset(args.utc_offset_hours)));

    fs::write(&args.output, text::render(&report, &catalog)).map_err(|e| DataError::io(&args.output, e))?;
    info!("Summary written to {}", args.output.display());

    if let Some(path) = &args.json {
        ReportDocument::new(&report, &catalog).write(path)?;
        info!("Report document written to {}", path.display());
    }

    Ok(report)
}

/// Offsets outside the valid range fall back to UTC.
pub fn utc_offset(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| Utc.fix())
}

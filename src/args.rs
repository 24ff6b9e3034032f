use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "RKS Processor",
    about = "Computes a Phigros player's RKS and best plays from a decoded save",
    long_about = "Computes a Phigros player's RKS from a decoded save export and a chart \
    difficulty table, then writes a text summary and, optionally, a JSON document for rendering"
)]
pub struct Args {
    /// Difficulty table, one chart per line: id, EZ, HD, IN and optionally AT ratings,
    /// tab separated
    #[arg(long, env = "RKS_DIFFICULTY_PATH", default_value = "difficulty.tsv")]
    pub difficulty: PathBuf,

    /// Chart info table (id, name, ...), used for display names only
    #[arg(long, env = "RKS_INFO_PATH", default_value = "info.tsv")]
    pub info: PathBuf,

    /// Skips the info table; plays are then listed by chart id
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_info: bool,

    /// Decoded save export (JSON) as produced by the save decoder
    #[arg(short, long, env = "RKS_SAVE_PATH")]
    pub save: PathBuf,

    /// Text summary output path
    #[arg(short, long, env = "RKS_OUTPUT_PATH", default_value = "output.txt")]
    pub output: PathBuf,

    /// Optional JSON document output path
    #[arg(short, long, env = "RKS_JSON_PATH")]
    pub json: Option<PathBuf>,

    /// UTC offset in hours used to stamp the update time
    #[arg(
        long,
        env = "RKS_UTC_OFFSET_HOURS",
        default_value_t = 8,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i32).range(-12..=14)
    )]
    pub utc_offset_hours: i32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

impl Args {
    pub fn info_path(&self) -> Option<&std::path::Path> {
        (!self.no_info).then_some(self.info.as_path())
    }
}

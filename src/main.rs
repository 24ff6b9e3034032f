use std::io::IsTerminal;

use clap::Parser;
use rks_processor::{args::Args, processor::process};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    match process(&args, chrono::Utc::now()) {
        Ok(report) => info!(
            "Done. RKS {:.4} from {} best and {} phi plays",
            report.result.rating,
            report.result.best.len(),
            report.result.phi.len()
        ),
        Err(e) => {
            error!("{}", e);
            error!("No report was written");
            std::process::exit(1);
        }
    }
}

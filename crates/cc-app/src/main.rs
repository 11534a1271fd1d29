#![deny(warnings)]

use std::io;
use std::path::PathBuf;

use clap::Parser;

use cc_app::detector::DEFAULT_DETECT_URL;
use cc_app::flow::{DetectorConfig, Flow};
use cc_app::logging::init_logging;
use cc_app::storage::Storage;

/// Score keeper for the Complex Partnership card game.
#[derive(Debug, Parser)]
#[command(
    name = "cc-counter",
    author,
    version,
    about = "Score keeper for the Complex Partnership card game"
)]
struct Cli {
    /// Path of the saved-game file (defaults to the platform data dir).
    #[arg(long, value_name = "FILE")]
    storage: Option<PathBuf>,

    /// API key for the card-detection service.
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Card-detection endpoint override.
    #[arg(long, value_name = "URL", default_value = DEFAULT_DETECT_URL)]
    detect_url: String,

    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let storage = match cli.storage {
        Some(path) => Storage::at(path),
        None => Storage::default_location(),
    };

    let detector = DetectorConfig {
        url: cli.detect_url,
        api_key: cli.api_key.or_else(|| std::env::var("CC_API_KEY").ok()),
    };

    let mut flow = Flow::new(storage, detector);
    flow.run(io::stdin().lock(), io::stdout().lock())
}

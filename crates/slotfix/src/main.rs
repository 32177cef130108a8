use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Convert course time slots in place.
///
/// Every `"<day> HH:MM-HH:MM"` string under courses[*].groups[*].time_slots
/// becomes {"day", "start_time", "end_time"}, or null when it does not match.
/// The file is overwritten.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the courses JSON file.
    #[clap(value_parser, env = "SLOTFIX_PATH")]
    path: PathBuf,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match slotfix::rewrite(&args.path) {
        Ok(_) => {
            println!("Time slots have been successfully converted.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

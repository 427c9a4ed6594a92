//! ScratchPad CLI.
//!
//! Usage:
//!   scratchpad --martini 3                    # Draw a glass with the default variant
//!   scratchpad --martini -basic 3 5           # Pick a variant
//!   scratchpad --reverser 12345 --measure10   # Warm up, then time 10 runs
//!   scratchpad --list                         # List commands and variants
//!   scratchpad --help                         # Show help
//!
//! Set `SCRATCHPAD_LOG=debug` to see dispatch and harness tracing on stderr.

use std::env;
use std::process::ExitCode;

use scratchpad::cli;
use scratchpad::config::ScratchConfig;
use scratchpad::error::CliError;
use scratchpad::registry::build_registry;
use scratchpad::utils::Console;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SCRATCHPAD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let registry = build_registry();
    let config = ScratchConfig::from_env();
    let mut console = Console::stdio();

    match cli::run(&args, &registry, &config, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        // already reported on the console
        Err(CliError::Command(_)) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

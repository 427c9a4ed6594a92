//! Command line reduction and dispatch.
//!
//! ```text
//! scratchpad <command> [-<variant>] [payload-args...] [--measure<N>]
//! ```

use std::io::Write;

use tracing::debug;

use crate::config::ScratchConfig;
use crate::error::CliError;
use crate::registry::CommandRegistry;
use crate::utils::console::Console;
use crate::utils::timer::MeasurementRequest;
use crate::utils::{harness, tui};

/// An argument list split into its parts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub variant: Option<String>,
    pub payload: Vec<String>,
    pub request: MeasurementRequest,
}

impl Invocation {
    /// Split `args` (program name excluded). `None` when there are no arguments.
    ///
    /// A trailing `--measure<N>` is only recognised after the command, and a
    /// variant token is the first remaining token if it starts with `-`.
    pub fn parse(args: &[String], warmup_passes: usize) -> Option<Self> {
        let (command, mut rest) = args.split_first()?;

        let mut request = MeasurementRequest::once();
        if let Some((last, init)) = rest.split_last() {
            if let Some(parsed) = MeasurementRequest::from_token(last, warmup_passes) {
                request = parsed;
                rest = init;
            }
        }

        let variant = match rest.split_first() {
            Some((token, tail)) if token.starts_with('-') => {
                rest = tail;
                Some(token.clone())
            }
            _ => None,
        };

        Some(Self {
            command: command.clone(),
            variant,
            payload: rest.to_vec(),
            request,
        })
    }
}

/// Run one CLI invocation against `console`.
///
/// Dispatch errors are reported on the console before being returned; an
/// `Ok` means the invocation reached the end normally, even if payload tokens
/// were rejected or the benchmark stopped on a fault.
pub fn run(
    args: &[String],
    registry: &CommandRegistry,
    config: &ScratchConfig,
    console: &mut Console,
) -> Result<(), CliError> {
    let Some(invocation) = Invocation::parse(args, config.warmup_passes) else {
        writeln!(console.out(), "No arguments provided...")?;
        writeln!(console.out())?;
        tui::print_help(console.out())?;
        return Ok(());
    };

    match invocation.command.as_str() {
        "--help" | "-h" => return Ok(tui::print_help(console.out())?),
        "--list" | "-l" => return Ok(tui::print_available_commands(console.out(), registry)?),
        "--verify" => return verify(registry, console),
        _ => {}
    }

    let driver = match registry.resolve(
        &invocation.command,
        invocation.variant.as_deref(),
        config,
    ) {
        Ok(driver) => driver,
        Err(e) => {
            writeln!(console.err(), "{}", e)?;
            return Err(e.into());
        }
    };

    writeln!(
        console.out(),
        "ScratchPad executing (command: '{}', variant: '{}', measure: {}, loops: {})...",
        driver.command_name(),
        driver.variant_name(),
        invocation.request.timed,
        invocation.request.loop_count
    )?;

    let outcome = harness::run(&driver, &invocation.payload, &invocation.request, console)?;
    debug!(
        ok = outcome.is_ok(),
        iterations = outcome.measurements.len(),
        total_nanos = outcome.measurements.total().as_nanos() as u64,
        "run finished"
    );

    Ok(())
}

fn verify(registry: &CommandRegistry, console: &mut Console) -> Result<(), CliError> {
    writeln!(console.out(), "Verifying {} commands...", registry.all().len())?;

    if let Err(e) = registry.verify_all() {
        writeln!(console.err(), "  ❌ {}", e)?;
        return Err(e.into());
    }
    for name in registry.list_names() {
        writeln!(console.out(), "  ✅ '{}' passed verification", name)?;
    }

    Ok(())
}

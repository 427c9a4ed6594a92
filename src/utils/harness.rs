//! Warm-up, timed loop and fault containment around a driver.
//!
//! 1. Warm-up: run the workload `warmup_count` times with output discarded.
//! 2. Timed loop: run it `loop_count` times, recording each elapsed time.
//! 3. Average: print the mean when more than one timed iteration completed.
//!
//! A fault (I/O failure or panic) out of the workload stops the current phase
//! and skips everything after it. The process itself keeps going.

use std::cell::{Cell, RefCell};
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use tracing::{debug, trace};

use super::console::Console;
use super::timer::{format_elapsed, time, MeasurementRequest, MeasurementResult};
use crate::error::Fault;

/// Something the harness can run over a batch of payload arguments.
pub trait Workload {
    /// Process every payload argument once.
    ///
    /// Per-argument problems are reported by the workload itself; only an
    /// `Err` is treated as a fault.
    fn run(&self, args: &[String], console: &mut Console) -> Result<(), Fault>;
}

/// What happened during a harness run
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Elapsed time of each completed timed iteration
    pub measurements: MeasurementResult,
    /// Whether a fault stopped the run early
    pub faulted: bool,
}

impl RunOutcome {
    pub fn is_ok(&self) -> bool {
        !self.faulted
    }
}

/// Samples reserved up front; longer loops grow the record as they go
const PREALLOCATED_SAMPLES: usize = 1024;

thread_local! {
    static CONTAINING: Cell<bool> = const { Cell::new(false) };
    static PANIC_LOCATION: RefCell<Option<String>> = const { RefCell::new(None) };
}

static PANIC_HOOK: Once = Once::new();

/// Chain a panic hook that stays quiet for panics the harness contains.
///
/// Panics on a thread inside [`invoke`] only have their location recorded;
/// everything else goes to the previously installed hook.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CONTAINING.with(|c| c.get()) {
                let location = info.location().map(|l| l.to_string());
                PANIC_LOCATION.with(|slot| *slot.borrow_mut() = location);
            } else {
                previous(info);
            }
        }));
    });
}

/// Invoke the workload once, turning panics into faults.
fn invoke<W: Workload + ?Sized>(
    workload: &W,
    args: &[String],
    console: &mut Console,
) -> Result<(), Fault> {
    install_panic_hook();

    CONTAINING.with(|c| c.set(true));
    let result = panic::catch_unwind(AssertUnwindSafe(|| workload.run(args, console)));
    CONTAINING.with(|c| c.set(false));

    result.unwrap_or_else(|payload| {
        let location = PANIC_LOCATION.with(|slot| slot.borrow_mut().take());
        Err(Fault::from_panic(payload, location))
    })
}

/// Run output-suppressed warm-up passes. Returns `false` on fault.
fn warm_up<W: Workload + ?Sized>(
    workload: &W,
    args: &[String],
    passes: usize,
    console: &mut Console,
) -> Result<bool, Fault> {
    let mut quiet = console.silence();

    for pass in 0..passes {
        trace!(pass, "warm-up pass");
        if let Err(fault) = invoke(workload, args, &mut quiet) {
            writeln!(quiet.err(), "Error encountered during measure setup: {}", fault)?;
            return Ok(false);
        }
    }

    Ok(true)
}

/// Run a workload according to `request`.
///
/// Returns `Err` only if the console itself cannot be written to while
/// reporting; faults from the workload are contained in the outcome.
pub fn run<W: Workload + ?Sized>(
    workload: &W,
    args: &[String],
    request: &MeasurementRequest,
    console: &mut Console,
) -> Result<RunOutcome, Fault> {
    let mut outcome = RunOutcome {
        measurements: MeasurementResult::with_capacity(request.loop_count.min(PREALLOCATED_SAMPLES)),
        faulted: false,
    };

    if request.warmup_count > 0 {
        debug!(passes = request.warmup_count, "warming up");
        if !warm_up(workload, args, request.warmup_count, console)? {
            outcome.faulted = true;
            return Ok(outcome);
        }
    }

    for iteration in 0..request.loop_count {
        let (elapsed, result) = time(|| invoke(workload, args, console));

        if let Err(fault) = result {
            writeln!(console.err(), "Error encountered: {}", fault)?;
            debug!(iteration, "timed loop stopped by fault");
            outcome.faulted = true;
            break;
        }

        trace!(iteration, nanos = elapsed.as_nanos() as u64, "iteration complete");
        outcome.measurements.push(elapsed);
        if request.timed {
            writeln!(console.out(), "Elapsed time: {}", format_elapsed(elapsed))?;
        }
    }

    if request.timed && request.loop_count > 1 && !outcome.faulted {
        if let Some(mean) = outcome.measurements.mean() {
            writeln!(
                console.out(),
                "Average time over {} loops: {}",
                outcome.measurements.len(),
                format_elapsed(mean)
            )?;
        }
    }

    console.flush()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::console::capture::captured;
    use std::cell::Cell;
    use std::io;
    use std::time::Duration;

    /// Writes one marker line per call and fails on a chosen call (1-based).
    struct Scripted {
        calls: Cell<usize>,
        fail_on: Option<usize>,
        panic_instead: bool,
    }

    impl Scripted {
        fn healthy() -> Self {
            Self {
                calls: Cell::new(0),
                fail_on: None,
                panic_instead: false,
            }
        }

        fn failing_on(call: usize) -> Self {
            Self {
                fail_on: Some(call),
                ..Self::healthy()
            }
        }
    }

    impl Workload for Scripted {
        fn run(&self, args: &[String], console: &mut Console) -> Result<(), Fault> {
            let call = self.calls.get() + 1;
            self.calls.set(call);
            if self.fail_on == Some(call) {
                if self.panic_instead {
                    panic!("scripted panic on call {}", call);
                }
                return Err(Fault::Io(io::Error::other(format!("scripted failure on call {}", call))));
            }
            for arg in args {
                writeln!(console.out(), "work {}", arg)?;
            }
            Ok(())
        }
    }

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_untimed_single_run() {
        let (mut console, out, err) = captured();
        let workload = Scripted::healthy();

        let outcome = run(&workload, &args(&["a"]), &MeasurementRequest::once(), &mut console).unwrap();

        assert!(outcome.is_ok());
        assert_eq!(outcome.measurements.len(), 1);
        assert_eq!(workload.calls.get(), 1);
        assert_eq!(out.lines(), vec!["work a"]);
        assert!(err.text().is_empty());
    }

    #[test]
    fn test_warmup_is_silent_and_unrecorded() {
        let (mut console, out, err) = captured();
        let workload = Scripted::healthy();
        let request = MeasurementRequest::timed(1, 5);

        let outcome = run(&workload, &args(&["x"]), &request, &mut console).unwrap();

        assert_eq!(workload.calls.get(), 6);
        assert_eq!(outcome.measurements.len(), 1);
        let lines = out.lines();
        assert_eq!(lines.iter().filter(|l| *l == "work x").count(), 1);
        assert!(lines[1].starts_with("Elapsed time: "));
        // a single loop prints no average
        assert_eq!(lines.len(), 2);
        assert!(err.text().is_empty());
    }

    #[test]
    fn test_average_matches_recorded_samples() {
        let (mut console, out, _err) = captured();
        let workload = Scripted::healthy();
        let request = MeasurementRequest::timed(3, 5);

        let outcome = run(&workload, &args(&["x"]), &request, &mut console).unwrap();

        assert_eq!(outcome.measurements.len(), 3);
        let samples = outcome.measurements.samples();
        let sum: u128 = samples.iter().map(Duration::as_nanos).sum();
        let expected = Duration::from_nanos((sum / 3) as u64);

        let lines = out.lines();
        let average = lines.last().unwrap();
        assert_eq!(
            average,
            &format!("Average time over 3 loops: {}", format_elapsed(expected))
        );
        let elapsed_lines: Vec<_> = lines.iter().filter(|l| l.starts_with("Elapsed time: ")).collect();
        assert_eq!(elapsed_lines.len(), 3);
        for (line, sample) in elapsed_lines.iter().zip(samples) {
            assert_eq!(**line, format!("Elapsed time: {}", format_elapsed(*sample)));
        }
    }

    #[test]
    fn test_fault_mid_loop_stops_remaining_iterations() {
        let (mut console, out, err) = captured();
        // no warm-up so call 2 is timed iteration 2
        let workload = Scripted::failing_on(2);
        let request = MeasurementRequest::timed(3, 0);

        let outcome = run(&workload, &args(&["x"]), &request, &mut console).unwrap();

        assert!(outcome.faulted);
        assert_eq!(workload.calls.get(), 2);
        assert_eq!(outcome.measurements.len(), 1);
        assert_eq!(
            err.lines(),
            vec!["Error encountered: std::io::Error: scripted failure on call 2"]
        );
        assert!(!out.text().contains("Average"));
    }

    #[test]
    fn test_warmup_fault_skips_timed_phase() {
        let (mut console, out, err) = captured();
        let workload = Scripted::failing_on(2);
        let request = MeasurementRequest::timed(4, 5);

        let outcome = run(&workload, &args(&["x"]), &request, &mut console).unwrap();

        assert!(outcome.faulted);
        assert_eq!(workload.calls.get(), 2);
        assert!(outcome.measurements.is_empty());
        assert!(out.text().is_empty());
        assert_eq!(err.lines().len(), 1);
        assert!(err.text().starts_with("Error encountered during measure setup: "));

        // output stream is restored after the warm-up fault
        writeln!(console.out(), "still here").unwrap();
        assert_eq!(out.lines(), vec!["still here"]);
    }

    #[test]
    fn test_panic_is_contained() {
        let (mut console, _out, err) = captured();
        let workload = Scripted {
            panic_instead: true,
            ..Scripted::failing_on(1)
        };

        let outcome = run(&workload, &args(&["x"]), &MeasurementRequest::timed(2, 0), &mut console).unwrap();

        assert!(outcome.faulted);
        let lines = err.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Error encountered: panic: scripted panic on call 1 at "));
        assert!(lines[0].contains("harness.rs"), "location missing: {}", lines[0]);
    }

    #[test]
    fn test_huge_loop_count_does_not_preallocate() {
        let (mut console, out, err) = captured();
        let workload = Scripted::failing_on(1);
        let request = MeasurementRequest::from_token("--measure18446744073709551615", 0).unwrap();
        assert_eq!(request.loop_count, usize::MAX);

        let outcome = run(&workload, &args(&["x"]), &request, &mut console).unwrap();

        assert!(outcome.faulted);
        assert!(!outcome.is_ok());
        assert_eq!(workload.calls.get(), 1);
        assert!(outcome.measurements.is_empty());
        assert_eq!(err.lines().len(), 1);
        assert!(out.text().is_empty());
    }
}

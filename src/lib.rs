//! # ScratchPad
//!
//! A scratch harness that runs named drivers, each offering interchangeable
//! algorithm variants for the same task, optionally wrapped in a simple
//! micro-benchmark (warm-up passes, timed loops, averaged elapsed time).

pub mod cli;
pub mod config;
pub mod error;
pub mod math;
pub mod registry;
pub mod text;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::ScratchConfig;
    pub use crate::error::{CliError, CommandError, Fault};
    pub use crate::registry::{build_registry, Command, CommandRegistry, Driver};
    pub use crate::utils::{Console, MeasurementRequest, RunOutcome, Workload};
}

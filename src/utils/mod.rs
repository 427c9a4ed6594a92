//! Utility modules for console output, timing and execution.

pub mod console;
pub mod harness;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use console::{Console, SilenceGuard};
pub use harness::{RunOutcome, Workload};
pub use timer::{MeasurementRequest, MeasurementResult};

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "recursive", "slick")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}

//! Digit reversal implementations.

mod iterative;
mod recursive;

pub use iterative::reverse_iterative;
pub use recursive::reverse_recursive;

use crate::utils::VariantInfo;

/// Type alias for digit reversal function signature
pub type ReverseFn = fn(f64) -> f64;

/// Selectable digit reversal strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReverseMethod {
    /// Self-call carrying the partially built result
    #[default]
    Recursive,
    /// Plain loop
    Iterative,
}

impl ReverseMethod {
    pub const ALL: [ReverseMethod; 2] = [ReverseMethod::Recursive, ReverseMethod::Iterative];

    pub fn name(self) -> &'static str {
        match self {
            ReverseMethod::Recursive => "recursive",
            ReverseMethod::Iterative => "iterative",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReverseMethod::Recursive => "Recursion with an accumulator argument",
            ReverseMethod::Iterative => "Loop that peels one digit per pass",
        }
    }

    pub fn function(self) -> ReverseFn {
        match self {
            ReverseMethod::Recursive => reverse_recursive,
            ReverseMethod::Iterative => reverse_iterative,
        }
    }

    /// Case-insensitive lookup by variant name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<ReverseFn>> {
    ReverseMethod::ALL
        .into_iter()
        .map(|m| VariantInfo {
            name: m.name(),
            description: m.description(),
            function: m.function(),
        })
        .collect()
}

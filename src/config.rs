//! Runtime configuration.
//!
//! Defaults cover normal use; a couple of environment variables allow
//! overriding them without a rebuild:
//!
//! - `SCRATCHPAD_WARMUP`: warm-up passes before a timed loop (default 5)
//! - `SCRATCHPAD_PERFORMANT`: glass strategy behind the `performant` alias

use tracing::warn;

use crate::text::martini::GlassMethod;
use crate::utils::timer::DEFAULT_WARMUP_PASSES;

pub const WARMUP_ENV: &str = "SCRATCHPAD_WARMUP";
pub const PERFORMANT_ENV: &str = "SCRATCHPAD_PERFORMANT";

/// Configuration shared by dispatch and the harness
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScratchConfig {
    /// Output-suppressed passes before a timed loop
    pub warmup_passes: usize,
    /// Concrete glass strategy the `performant` alias resolves to
    pub performant_glass: GlassMethod,
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self {
            warmup_passes: DEFAULT_WARMUP_PASSES,
            performant_glass: GlassMethod::DEFAULT_PERFORMANT,
        }
    }
}

impl ScratchConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`. Invalid values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(WARMUP_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(passes) => config.warmup_passes = passes,
                Err(_) => warn!(value = %raw, "ignoring invalid {}", WARMUP_ENV),
            }
        }

        if let Some(raw) = lookup(PERFORMANT_ENV) {
            match GlassMethod::from_name(raw.trim()) {
                Some(GlassMethod::Performant) | None => {
                    warn!(value = %raw, "ignoring invalid {}", PERFORMANT_ENV)
                }
                Some(method) => config.performant_glass = method,
            }
        }

        config
    }
}

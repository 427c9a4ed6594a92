//! Martini glass renderers.
//!
//! Every variant writes the same bytes for the same size; they only differ in
//! how much they buffer before touching the sink. A size below 1 or above
//! [`MAX_GLASS_SIZE`] renders nothing and returns `Ok(false)`.

mod basic;
mod modified;
mod original;
mod slick;

pub use basic::glass_basic;
pub use modified::glass_modified;
pub use original::glass_original;
pub use slick::glass_slick;

use std::io::{self, Write};

use crate::utils::VariantInfo;

/// Type alias for glass renderer signature
pub type GlassFn = fn(i32, &mut dyn Write) -> io::Result<bool>;

/// Selectable glass rendering strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlassMethod {
    /// Whichever concrete strategy is configured as the fastest
    #[default]
    Performant,
    /// Single buffer built from the middle out
    Slick,
    /// Separate top and bottom buffers
    Modified,
    /// Direct bowl, buffered stem and base
    Original,
    /// Direct output in two passes
    Basic,
}

impl GlassMethod {
    pub const ALL: [GlassMethod; 5] = [
        GlassMethod::Performant,
        GlassMethod::Slick,
        GlassMethod::Modified,
        GlassMethod::Original,
        GlassMethod::Basic,
    ];

    /// Target of `Performant` unless configured otherwise
    pub const DEFAULT_PERFORMANT: GlassMethod = GlassMethod::Slick;

    pub fn name(self) -> &'static str {
        match self {
            GlassMethod::Performant => "performant",
            GlassMethod::Slick => "slick",
            GlassMethod::Modified => "modified",
            GlassMethod::Original => "original",
            GlassMethod::Basic => "basic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GlassMethod::Performant => "Alias for the fastest known strategy",
            GlassMethod::Slick => "One buffer, bowl prepended around the stem",
            GlassMethod::Modified => "Two buffers filled in a single loop",
            GlassMethod::Original => "Bowl written directly, stem and base buffered",
            GlassMethod::Basic => "Everything written directly in two loops",
        }
    }

    /// Case-insensitive lookup by variant name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    /// Map `Performant` onto `target`; concrete methods map onto themselves.
    ///
    /// A `Performant` target is never followed, so the result is always concrete.
    pub fn resolve(self, target: GlassMethod) -> GlassMethod {
        match (self, target) {
            (GlassMethod::Performant, GlassMethod::Performant) => Self::DEFAULT_PERFORMANT,
            (GlassMethod::Performant, target) => target,
            (concrete, _) => concrete,
        }
    }

    pub fn function(self) -> GlassFn {
        match self.resolve(Self::DEFAULT_PERFORMANT) {
            GlassMethod::Modified => glass_modified,
            GlassMethod::Original => glass_original,
            GlassMethod::Basic => glass_basic,
            GlassMethod::Slick | GlassMethod::Performant => glass_slick,
        }
    }
}

/// Largest size any variant will draw. A glass grows quadratically with its
/// size, so the buffered variants would otherwise try to allocate gigabytes.
pub const MAX_GLASS_SIZE: i32 = 1000;

/// Size as a `usize` when it is within `1..=MAX_GLASS_SIZE`
fn checked_size(size: i32) -> Option<usize> {
    if !(1..=MAX_GLASS_SIZE).contains(&size) {
        return None;
    }
    usize::try_from(size).ok()
}

/// Render a glass into a string. `None` when the size is out of range.
pub fn render_glass(function: GlassFn, size: i32) -> Option<String> {
    let mut buf = Vec::new();
    match function(size, &mut buf) {
        Ok(true) => String::from_utf8(buf).ok(),
        _ => None,
    }
}

/// Get all concrete variants (the `Performant` alias is not listed)
pub fn available_variants() -> Vec<VariantInfo<GlassFn>> {
    GlassMethod::ALL
        .into_iter()
        .filter(|&m| m != GlassMethod::Performant)
        .map(|m| VariantInfo {
            name: m.name(),
            description: m.description(),
            function: m.function(),
        })
        .collect()
}

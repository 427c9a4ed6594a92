//! # Martini Glass
//!
//! Draws an ASCII martini glass for a given size: a bowl of `size` rows
//! narrowing by two characters per row, `size` stem lines, and a base as wide
//! as the brim (`2 * size - 1`).
//!
//! ```text
//! 00000
//!  000
//!   0
//!   |
//!   |
//!   |
//! =====
//! ```

pub mod code;
pub mod test;

pub use code::{GlassFn, GlassMethod};

use std::io::Write;

use crate::config::ScratchConfig;
use crate::error::{Fault, InvalidInput};
use crate::registry::{Command, Driver};
use crate::utils::console::Console;

/// Driver bound to one glass rendering strategy
#[derive(Clone, Copy, Debug)]
pub struct Martini {
    method: GlassMethod,
    resolved: GlassMethod,
    render: GlassFn,
}

impl Martini {
    /// Bind `method`, resolving the `performant` alias onto `performant_target`
    pub fn new(method: GlassMethod, performant_target: GlassMethod) -> Self {
        let resolved = method.resolve(performant_target);
        Self {
            method,
            resolved,
            render: resolved.function(),
        }
    }

    /// The variant that was selected
    pub fn method(&self) -> GlassMethod {
        self.method
    }

    /// The concrete strategy that actually renders
    pub fn resolved(&self) -> GlassMethod {
        self.resolved
    }

    pub fn parse_input(token: &str) -> Result<i32, InvalidInput> {
        token
            .trim()
            .parse::<i32>()
            .map_err(|_| InvalidInput(token.to_string()))
    }

    /// Draw a glass per payload token, reporting unusable ones on the error stream
    pub fn run(&self, args: &[String], console: &mut Console) -> Result<(), Fault> {
        for arg in args {
            match Self::parse_input(arg) {
                Ok(size) => {
                    writeln!(console.out(), "Martini (size: {}, method: {}):", size, self.method.name())?;
                    if !(self.render)(size, console.out())? {
                        writeln!(console.err(), "{}", InvalidInput(size.to_string()))?;
                    }
                }
                Err(invalid) => writeln!(console.err(), "{}", invalid)?,
            }
        }
        Ok(())
    }
}

impl Default for Martini {
    fn default() -> Self {
        Self::new(GlassMethod::default(), GlassMethod::DEFAULT_PERFORMANT)
    }
}

/// Registry entry for the martini glass command
pub struct MartiniCommand;

impl Command for MartiniCommand {
    fn name(&self) -> &'static str {
        "martini"
    }

    fn description(&self) -> &'static str {
        "Draws an ASCII martini glass of the given size"
    }

    fn category(&self) -> &'static str {
        "text"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        GlassMethod::ALL.iter().map(|m| m.name()).collect()
    }

    fn default_variant(&self) -> &'static str {
        GlassMethod::default().name()
    }

    fn bind(&self, variant: &str, config: &ScratchConfig) -> Option<Driver> {
        GlassMethod::from_name(variant)
            .map(|m| Driver::Martini(Martini::new(m, config.performant_glass)))
    }

    fn verify(&self) -> Result<(), String> {
        test::verify_all()
    }
}

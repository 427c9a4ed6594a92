//! # Digit Reversal
//!
//! Reverses the decimal digits of a non-negative integral number:
//!
//! `reverse(12345) = 54321`, `reverse(100) = 1`
//!
//! Leading zeros of the result are dropped, so reversal is only an
//! involution for numbers without trailing zeros.

pub mod code;
pub mod test;

pub use code::{ReverseFn, ReverseMethod};

use std::io::Write;

use crate::config::ScratchConfig;
use crate::error::{Fault, InvalidInput};
use crate::registry::{Command, Driver};
use crate::utils::console::Console;

/// Driver bound to one digit reversal strategy
#[derive(Clone, Copy, Debug)]
pub struct Reverser {
    method: ReverseMethod,
    reverse: ReverseFn,
}

impl Reverser {
    pub fn new(method: ReverseMethod) -> Self {
        Self {
            method,
            reverse: method.function(),
        }
    }

    pub fn method(&self) -> ReverseMethod {
        self.method
    }

    pub fn reverse(&self, num: f64) -> f64 {
        (self.reverse)(num)
    }

    /// Parse a payload token into a non-negative integral value.
    ///
    /// Fractional parts are floored; negative and non-finite values are rejected.
    pub fn parse_input(token: &str) -> Result<f64, InvalidInput> {
        match token.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(value.floor()),
            _ => Err(InvalidInput(token.to_string())),
        }
    }

    /// Reverse every payload token, reporting unusable ones on the error stream
    pub fn run(&self, args: &[String], console: &mut Console) -> Result<(), Fault> {
        for arg in args {
            match Self::parse_input(arg) {
                Ok(value) => {
                    let out = console.out();
                    writeln!(out, "Reverser (input: {}, method: {}):", value, self.method.name())?;
                    writeln!(out, "{}", self.reverse(value))?;
                }
                Err(invalid) => writeln!(console.err(), "{}", invalid)?,
            }
        }
        Ok(())
    }
}

impl Default for Reverser {
    fn default() -> Self {
        Self::new(ReverseMethod::default())
    }
}

/// Registry entry for the digit reversal command
pub struct ReverserCommand;

impl Command for ReverserCommand {
    fn name(&self) -> &'static str {
        "reverser"
    }

    fn description(&self) -> &'static str {
        "Reverses the decimal digits of non-negative numbers"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        ReverseMethod::ALL.iter().map(|m| m.name()).collect()
    }

    fn default_variant(&self) -> &'static str {
        ReverseMethod::default().name()
    }

    fn bind(&self, variant: &str, _config: &ScratchConfig) -> Option<Driver> {
        ReverseMethod::from_name(variant).map(|m| Driver::Reverser(Reverser::new(m)))
    }

    fn verify(&self) -> Result<(), String> {
        test::verify_all()
    }
}

//! Numeric algorithm families.

pub mod reverser;

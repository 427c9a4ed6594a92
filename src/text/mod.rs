//! Text rendering algorithm families.

pub mod martini;

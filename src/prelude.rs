//! Prelude module for the agecalc crate.
//!
//! Re-exports the derive macros from derive_more used across the date types.

pub use derive_more::Display;

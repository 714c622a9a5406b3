//! Frequency-weighted lottery drawing generator
//!
//! Historical drawings are tallied into main and special frequency tables,
//! then new drawings are sampled with probability proportional to those
//! counts, subject to range and uniqueness constraints with a bounded retry.

#![forbid(unsafe_code)]

/// Weighted sampling and constrained drawing generation
pub mod algorithm;
/// Frequency analysis of historical drawings
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Drawing and range data types
pub mod model;
/// Self-describing callable tools
pub mod tool;

pub use io::error::{DrawError, Result};

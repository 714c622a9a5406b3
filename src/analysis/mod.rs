//! Statistical analysis of historical drawings

/// Frequency tables for main and special numbers
pub mod frequency;

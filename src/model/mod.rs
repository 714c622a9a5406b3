//! Drawing data types shared by the analyzer, the generator and the tool boundary

/// Historical and generated drawings, raw provider records
pub mod drawing;
/// Closed value ranges for main and special numbers
pub mod range;

pub use drawing::{HistoricalDrawing, NumberCategory, RawRecord, SyntheticDrawing};
pub use range::ValidRange;

use crate::io::error::Result;
use crate::model::{HistoricalDrawing, ValidRange};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use tracing::debug;

/// Occurrence count for each observed value of one category
///
/// Keys are exactly the values observed; zero counts are never stored.
/// Ordered so that iteration, and therefore seeded sampling, is reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u32, u32>,
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of `value`
    pub fn tally(&mut self, value: u32) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrences of `value`, zero if never observed
    pub fn count(&self, value: u32) -> u32 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Total observations tallied
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct values observed
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of distinct observed values lying inside `range`
    pub fn distinct_in_range(&self, range: ValidRange) -> usize {
        self.counts
            .range(range.low()..=range.high())
            .count()
    }

    /// Test whether nothing has been tallied
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(value, count)` pairs in ascending value order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }

    /// The `k` most frequent values, ties broken by lower value first
    pub fn most_common(&self, k: usize) -> Vec<(u32, u32)> {
        let mut entries: Vec<(u32, u32)> = self.iter().collect();
        entries.sort_by_key(|&(value, count)| (Reverse(count), value));
        entries.truncate(k);
        entries
    }
}

impl FromIterator<u32> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut table = Self::new();
        for value in iter {
            table.tally(value);
        }
        table
    }
}

/// Main and special frequency tables built from one batch of drawings
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTables {
    /// Tally of the first five numbers of every drawing
    pub main: FrequencyTable,
    /// Tally of the sixth number of every drawing
    pub special: FrequencyTable,
    /// Number of drawings analyzed
    pub drawings: usize,
}

impl FrequencyTables {
    /// Tally already-parsed drawings
    pub fn from_drawings(drawings: &[HistoricalDrawing]) -> Self {
        let mut tables = Self {
            drawings: drawings.len(),
            ..Self::default()
        };
        for drawing in drawings {
            for &value in drawing.main() {
                tables.main.tally(value);
            }
            tables.special.tally(drawing.special());
        }
        tables
    }
}

/// Parse raw winning-number records and build both frequency tables
///
/// Every record is parsed before anything is tallied, so a malformed record
/// rejects the whole batch and no partial table is ever produced.
///
/// # Errors
///
/// Returns `MalformedRecord` for the first record that is not six positive integers
pub fn analyze<S: AsRef<str>>(records: &[S]) -> Result<FrequencyTables> {
    let drawings = records
        .iter()
        .enumerate()
        .map(|(index, record)| HistoricalDrawing::parse(index, record.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let tables = FrequencyTables::from_drawings(&drawings);
    debug!(
        drawings = tables.drawings,
        main_distinct = tables.main.distinct(),
        special_distinct = tables.special.distinct(),
        "built frequency tables"
    );
    Ok(tables)
}

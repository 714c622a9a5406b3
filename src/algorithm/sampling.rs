use crate::analysis::frequency::FrequencyTable;
use crate::io::error::{DrawError, Result};
use crate::model::NumberCategory;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build the generator's random source
///
/// A fixed seed gives reproducible output; without one the generator is
/// seeded from the thread-local entropy source.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Observed values of one category with selection probability proportional
/// to their historical count
///
/// Values are distinct and ascending; a slot is a position in that list.
#[derive(Clone, Debug)]
pub struct WeightedPool {
    values: Vec<u32>,
    index: WeightedIndex<u64>,
}

impl WeightedPool {
    /// Build a pool over every value in the table
    ///
    /// # Errors
    ///
    /// Returns `EmptyFrequencyTable` if the table holds no observations
    pub fn from_table(table: &FrequencyTable, category: NumberCategory) -> Result<Self> {
        if table.is_empty() {
            return Err(DrawError::EmptyFrequencyTable { category });
        }
        let (values, weights): (Vec<u32>, Vec<u64>) = table
            .iter()
            .map(|(value, count)| (value, u64::from(count)))
            .unzip();
        let index = WeightedIndex::new(&weights)
            .map_err(|_err| DrawError::EmptyFrequencyTable { category })?;
        Ok(Self { values, index })
    }

    /// Draw one slot, with replacement
    pub fn sample_slot<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.index.sample(rng)
    }

    /// Fill `out` with independent slot draws, with replacement
    pub fn sample_slots_into<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut [usize]) {
        for slot in out {
            *slot = self.sample_slot(rng);
        }
    }

    /// Draw one value, with replacement
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.value(self.sample_slot(rng))
    }

    /// Value held in `slot`, zero for an unknown slot
    pub fn value(&self, slot: usize) -> u32 {
        self.values.get(slot).copied().unwrap_or_default()
    }

    /// Distinct values in slot order
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of distinct values the pool can yield
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Pools are never empty once built
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

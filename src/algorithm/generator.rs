use crate::algorithm::numberset::NumberSet;
use crate::algorithm::sampling::WeightedPool;
use crate::analysis::frequency::FrequencyTables;
use crate::io::configuration::{
    DEFAULT_MAIN_RANGE, DEFAULT_MAX_ATTEMPTS, DEFAULT_SPECIAL_RANGE, MAIN_NUMBERS_PER_DRAWING,
};
use crate::io::error::{DrawError, Result, invalid_parameter};
use crate::model::{NumberCategory, SyntheticDrawing, ValidRange};
use rand::Rng;
use tracing::{debug, trace};

/// Generation parameters: valid ranges and the per-draw retry budget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Range every main number must fall in
    pub main_range: ValidRange,
    /// Range the special number must fall in
    pub special_range: ValidRange,
    /// Sampling attempts allowed for each sub-draw before the pool is declared degenerate
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            main_range: DEFAULT_MAIN_RANGE,
            special_range: DEFAULT_SPECIAL_RANGE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Produces synthetic drawings weighted by historical frequency
///
/// Each drawing samples main numbers with replacement from the observed
/// values, rejects candidates with out-of-range or repeated numbers and
/// retries within the configured budget; the special number is sampled the
/// same way until it lands in range.
#[derive(Clone, Copy, Debug, Default)]
pub struct DrawingGenerator {
    config: GeneratorConfig,
}

impl DrawingGenerator {
    /// Create a generator with the given configuration
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Access the configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validate the tables and build the weighted pools
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The retry budget is zero
    /// - Either table is empty (`EmptyFrequencyTable`)
    /// - Fewer than five distinct main values, or no special value, lie in
    ///   range (`DegenerateFrequencyPool`)
    pub fn prepare(&self, tables: &FrequencyTables) -> Result<PreparedPools> {
        if self.config.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.config.max_attempts,
                &"must be at least 1",
            ));
        }

        let main = WeightedPool::from_table(&tables.main, NumberCategory::Main)?;
        let special = WeightedPool::from_table(&tables.special, NumberCategory::Special)?;

        let main_slots = NumberSet::new(main.values(), self.config.main_range);
        let main_in_range = main_slots.allowed();
        if main_in_range < MAIN_NUMBERS_PER_DRAWING {
            return Err(DrawError::DegenerateFrequencyPool {
                category: NumberCategory::Main,
                distinct_in_range: main_in_range,
                required: MAIN_NUMBERS_PER_DRAWING,
                attempts: 0,
            });
        }

        let special_in_range = tables.special.distinct_in_range(self.config.special_range);
        if special_in_range == 0 {
            return Err(DrawError::DegenerateFrequencyPool {
                category: NumberCategory::Special,
                distinct_in_range: 0,
                required: 1,
                attempts: 0,
            });
        }

        Ok(PreparedPools {
            main,
            special,
            main_slots,
            main_in_range,
            special_in_range,
            config: self.config,
        })
    }

    /// Generate `count` drawings
    ///
    /// A count of zero returns immediately without touching `rng`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::prepare`], or `DegenerateFrequencyPool`
    /// when a drawing exhausts its retry budget
    pub fn generate<R: Rng + ?Sized>(
        &self,
        tables: &FrequencyTables,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<SyntheticDrawing>> {
        self.generate_with(tables, count, rng, |_| {})
    }

    /// Generate `count` drawings, reporting each completed slot to `on_drawing`
    ///
    /// Slot `i` of the output always holds the `i`-th attempt.
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate`]
    pub fn generate_with<R, F>(
        &self,
        tables: &FrequencyTables,
        count: usize,
        rng: &mut R,
        mut on_drawing: F,
    ) -> Result<Vec<SyntheticDrawing>>
    where
        R: Rng + ?Sized,
        F: FnMut(usize),
    {
        if count == 0 {
            return Ok(Vec::new());
        }

        let pools = self.prepare(tables)?;
        let mut drawings = Vec::with_capacity(count);

        for slot in 0..count {
            drawings.push(pools.draw(rng)?);
            on_drawing(slot);
        }

        debug!(count, "generated drawings");
        Ok(drawings)
    }
}

/// Weighted pools validated against a configuration, ready to draw from
#[derive(Clone, Debug)]
pub struct PreparedPools {
    main: WeightedPool,
    special: WeightedPool,
    main_slots: NumberSet,
    main_in_range: usize,
    special_in_range: usize,
    config: GeneratorConfig,
}

impl PreparedPools {
    /// Produce one drawing
    ///
    /// # Errors
    ///
    /// Returns `DegenerateFrequencyPool` if either sub-draw exhausts the retry budget
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SyntheticDrawing> {
        let (main, main_attempts) = self.draw_main(rng)?;
        let (special, special_attempts) = self.draw_special(rng)?;
        trace!(main_attempts, special_attempts, "drew one drawing");
        Ok(SyntheticDrawing::assemble(main, special))
    }

    /// Sample five values with replacement until all are in range and distinct
    fn draw_main<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<([u32; MAIN_NUMBERS_PER_DRAWING], usize)> {
        let mut slots = [0usize; MAIN_NUMBERS_PER_DRAWING];
        let mut seen = self.main_slots.clone();

        for attempt in 1..=self.config.max_attempts {
            self.main.sample_slots_into(rng, &mut slots);
            seen.clear();
            // Pool values are distinct, so distinct slots mean distinct numbers
            if slots.iter().all(|&slot| seen.insert(slot)) {
                return Ok((slots.map(|slot| self.main.value(slot)), attempt));
            }
        }

        debug!(
            attempts = self.config.max_attempts,
            distinct_in_range = self.main_in_range,
            "main pool exhausted retry budget"
        );
        Err(DrawError::DegenerateFrequencyPool {
            category: NumberCategory::Main,
            distinct_in_range: self.main_in_range,
            required: MAIN_NUMBERS_PER_DRAWING,
            attempts: self.config.max_attempts,
        })
    }

    fn draw_special<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(u32, usize)> {
        for attempt in 1..=self.config.max_attempts {
            let value = self.special.sample(rng);
            if self.config.special_range.contains(value) {
                return Ok((value, attempt));
            }
        }

        debug!(
            attempts = self.config.max_attempts,
            distinct_in_range = self.special_in_range,
            "special pool exhausted retry budget"
        );
        Err(DrawError::DegenerateFrequencyPool {
            category: NumberCategory::Special,
            distinct_in_range: self.special_in_range,
            required: 1,
            attempts: self.config.max_attempts,
        })
    }
}

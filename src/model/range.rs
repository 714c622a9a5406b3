use crate::io::error::{Result, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// Closed integer interval `[low, high]` a drawn number must fall in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValidRange {
    low: u32,
    high: u32,
}

impl ValidRange {
    /// Create a validated range
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `low` is zero or exceeds `high`
    pub fn new(low: u32, high: u32) -> Result<Self> {
        if low == 0 {
            return Err(invalid_parameter(
                "range",
                &format!("{low}-{high}"),
                &"lower bound must be at least 1",
            ));
        }
        if low > high {
            return Err(invalid_parameter(
                "range",
                &format!("{low}-{high}"),
                &"lower bound exceeds upper bound",
            ));
        }
        Ok(Self { low, high })
    }

    /// Unchecked constructor for compile-time constants
    pub(crate) const fn from_bounds(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Inclusive lower bound
    pub const fn low(&self) -> u32 {
        self.low
    }

    /// Inclusive upper bound
    pub const fn high(&self) -> u32 {
        self.high
    }

    /// Test whether a value lies inside the range
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.low && value <= self.high
    }

    /// Number of integers in the range
    pub const fn len(&self) -> usize {
        (self.high - self.low) as usize + 1
    }

    /// Ranges always hold at least one value
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for ValidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl FromStr for ValidRange {
    type Err = crate::io::error::DrawError;

    /// Parse `"low-high"`, e.g. `"1-69"`
    fn from_str(s: &str) -> Result<Self> {
        let (low, high) = s
            .split_once('-')
            .ok_or_else(|| invalid_parameter("range", &s, &"expected LOW-HIGH"))?;
        let low = low
            .trim()
            .parse::<u32>()
            .map_err(|e| invalid_parameter("range", &s, &e))?;
        let high = high
            .trim()
            .parse::<u32>()
            .map_err(|e| invalid_parameter("range", &s, &e))?;
        Self::new(low, high)
    }
}

use crate::io::configuration::{FIELDS_PER_RECORD, MAIN_NUMBERS_PER_DRAWING};
use crate::io::error::{DrawError, MalformedReason, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Which part of a drawing a number belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberCategory {
    /// One of the five distinct primary numbers
    Main,
    /// The single number drawn from the secondary range
    Special,
}

impl fmt::Display for NumberCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Special => write!(f, "special"),
        }
    }
}

/// One row as published by the historical data set
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// ISO-8601 timestamp of the drawing
    pub draw_date: String,
    /// Six whitespace-separated integers
    pub winning_numbers: String,
    /// Power Play multiplier, absent on older rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<String>,
}

impl RawRecord {
    /// Create a record without a multiplier
    pub fn new(draw_date: impl Into<String>, winning_numbers: impl Into<String>) -> Self {
        Self {
            draw_date: draw_date.into(),
            winning_numbers: winning_numbers.into(),
            multiplier: None,
        }
    }

    /// Calendar date portion of `draw_date`
    pub fn date(&self) -> &str {
        self.draw_date
            .split_once('T')
            .map_or(self.draw_date.as_str(), |(date, _)| date)
    }
}

/// A past drawing: five main numbers followed by the special number
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoricalDrawing {
    numbers: [u32; FIELDS_PER_RECORD],
}

impl HistoricalDrawing {
    /// Parse whitespace-separated winning numbers
    ///
    /// `index` identifies the record within its batch for error reporting.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` if the text does not hold exactly six
    /// positive integers; zero and negative fields are `NonPositive`
    pub fn parse(index: usize, text: &str) -> Result<Self> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() != FIELDS_PER_RECORD {
            return Err(DrawError::MalformedRecord {
                index,
                reason: MalformedReason::FieldCount {
                    found: fields.len(),
                },
            });
        }

        let mut values = [0u32; FIELDS_PER_RECORD];
        for (field, (slot, raw)) in values.iter_mut().zip(&fields).enumerate() {
            *slot = raw.parse::<u32>().map_err(|_err| {
                // Negative integers count as non-positive, not non-numeric
                let negative = raw
                    .strip_prefix('-')
                    .is_some_and(|digits| digits.parse::<u32>().is_ok());
                let reason = if negative {
                    MalformedReason::NonPositive { field }
                } else {
                    MalformedReason::NonNumeric {
                        field,
                        value: (*raw).to_string(),
                    }
                };
                DrawError::MalformedRecord { index, reason }
            })?;
        }

        Self::from_values(index, &values)
    }

    /// Build from already-split values
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` if there are not exactly six values or any is zero
    pub fn from_values(index: usize, values: &[u32]) -> Result<Self> {
        let Ok(numbers) = <[u32; FIELDS_PER_RECORD]>::try_from(values) else {
            return Err(DrawError::MalformedRecord {
                index,
                reason: MalformedReason::FieldCount {
                    found: values.len(),
                },
            });
        };
        if let Some(field) = numbers.iter().position(|&n| n == 0) {
            return Err(DrawError::MalformedRecord {
                index,
                reason: MalformedReason::NonPositive { field },
            });
        }
        Ok(Self { numbers })
    }

    /// The five main numbers in recorded order
    pub fn main(&self) -> &[u32] {
        self.numbers
            .get(..MAIN_NUMBERS_PER_DRAWING)
            .unwrap_or_default()
    }

    /// The special number
    pub fn special(&self) -> u32 {
        self.numbers
            .get(MAIN_NUMBERS_PER_DRAWING)
            .copied()
            .unwrap_or_default()
    }
}

/// A generated drawing
///
/// Main numbers are pairwise distinct and ascending; the special number is
/// kept apart and never sorted against them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SyntheticDrawing {
    main: [u32; MAIN_NUMBERS_PER_DRAWING],
    special: u32,
}

impl SyntheticDrawing {
    /// Assemble a drawing, sorting the main numbers
    pub(crate) fn assemble(mut main: [u32; MAIN_NUMBERS_PER_DRAWING], special: u32) -> Self {
        main.sort_unstable();
        Self { main, special }
    }

    /// Main numbers in ascending order
    pub const fn main(&self) -> &[u32; MAIN_NUMBERS_PER_DRAWING] {
        &self.main
    }

    /// The special number
    pub const fn special(&self) -> u32 {
        self.special
    }

    /// All six numbers, main first
    pub fn numbers(&self) -> [u32; FIELDS_PER_RECORD] {
        let mut numbers = [self.special; FIELDS_PER_RECORD];
        for (slot, &value) in numbers.iter_mut().zip(&self.main) {
            *slot = value;
        }
        numbers
    }
}

impl fmt::Display for SyntheticDrawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let main = self
            .main
            .iter()
            .map(|n| format!("{n:02}"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{main} | {:02}", self.special)
    }
}

impl Serialize for SyntheticDrawing {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.numbers().serialize(serializer)
    }
}

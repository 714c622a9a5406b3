//! Error types for record parsing, generation and the tool boundary

use crate::model::drawing::NumberCategory;
use std::fmt;
use std::path::PathBuf;

/// Why a historical record failed to parse into a drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// Record did not contain exactly six fields
    FieldCount {
        /// Number of fields actually present
        found: usize,
    },
    /// A field was not a number at all
    NonNumeric {
        /// Zero-based field position
        field: usize,
        /// Offending text
        value: String,
    },
    /// A field was zero or negative
    NonPositive {
        /// Zero-based field position
        field: usize,
    },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { found } => write!(f, "expected 6 fields, found {found}"),
            Self::NonNumeric { field, value } => {
                write!(f, "field {field} is not a number: '{value}'")
            }
            Self::NonPositive { field } => write!(f, "field {field} must be positive"),
        }
    }
}

/// Main error type for all drawing operations
#[derive(Debug)]
pub enum DrawError {
    /// A historical record could not be parsed; the whole batch is rejected
    MalformedRecord {
        /// Position of the record in the supplied batch
        index: usize,
        /// What was wrong with it
        reason: MalformedReason,
    },

    /// Generation was requested against a table with no observations
    EmptyFrequencyTable {
        /// Which table was empty
        category: NumberCategory,
    },

    /// The weighted pool cannot satisfy the range or uniqueness constraint
    ///
    /// Raised up front when too few distinct in-range values exist, or after
    /// the retry budget runs out on a pool that is feasible but too skewed.
    DegenerateFrequencyPool {
        /// Which pool is degenerate
        category: NumberCategory,
        /// Distinct observed values lying inside the valid range
        distinct_in_range: usize,
        /// Distinct values one drawing needs
        required: usize,
        /// Sampling attempts made before giving up
        attempts: usize,
    },

    /// Historical data could not be obtained, or none was returned
    ProviderUnavailable {
        /// Name of the provider
        provider: &'static str,
        /// What went wrong
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tool name not present in the registry
    UnknownTool {
        /// Requested name
        name: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// What was being encoded or decoded
        context: &'static str,
        /// Underlying serde error
        source: serde_json::Error,
    },
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRecord { index, reason } => {
                write!(f, "Malformed record at index {index}: {reason}")
            }
            Self::EmptyFrequencyTable { category } => {
                write!(f, "No {category} numbers observed; cannot generate drawings")
            }
            Self::DegenerateFrequencyPool {
                category,
                distinct_in_range,
                required,
                attempts,
            } => {
                write!(
                    f,
                    "Degenerate {category} frequency pool: {distinct_in_range} distinct in-range values, \
                     {required} required (gave up after {attempts} attempts)"
                )
            }
            Self::ProviderUnavailable { provider, reason } => {
                write!(f, "Provider '{provider}' unavailable: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownTool { name } => write!(f, "Unknown tool '{name}'"),
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { context, source } => {
                write!(f, "Serialization error in {context}: {source}")
            }
        }
    }
}

impl std::error::Error for DrawError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for drawing results
pub type Result<T> = std::result::Result<T, DrawError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DrawError {
    DrawError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a provider unavailable error
pub fn provider_unavailable(provider: &'static str, reason: &impl ToString) -> DrawError {
    DrawError::ProviderUnavailable {
        provider,
        reason: reason.to_string(),
    }
}

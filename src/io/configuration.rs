//! Domain constants and runtime configuration defaults

use crate::model::range::ValidRange;

// Shape of a drawing
/// Main numbers per drawing
pub const MAIN_NUMBERS_PER_DRAWING: usize = 5;
/// Fields in one historical record (main numbers plus the special number)
pub const FIELDS_PER_RECORD: usize = MAIN_NUMBERS_PER_DRAWING + 1;

/// Valid range for main numbers
pub const DEFAULT_MAIN_RANGE: ValidRange = ValidRange::from_bounds(1, 69);
/// Valid range for the special number
pub const DEFAULT_SPECIAL_RANGE: ValidRange = ValidRange::from_bounds(1, 26);

// Prevents a degenerate pool from looping forever
/// Sampling attempts allowed per sub-draw before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

// Tool defaults, exposed verbatim in the tool descriptors
/// Default number of recent drawings to list
pub const DEFAULT_RECENT_DRAWINGS: i64 = 5;
/// Default number of drawings to generate
pub const DEFAULT_DRAWINGS_TO_GENERATE: i64 = 10;
/// Default number of historical drawings to analyze
pub const DEFAULT_DRAWINGS_TO_ANALYZE: i64 = 500;

// Historical data source
/// Socrata resource holding the Powerball winning numbers
pub const SOCRATA_ENDPOINT: &str = "https://data.ny.gov/resource/d6yy-54nr.json";
/// Header carrying an optional Socrata application token
pub const SOCRATA_TOKEN_HEADER: &str = "X-App-Token";
/// HTTP request timeout in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Progress display settings
/// Generation batches at least this large get a progress bar
pub const PROGRESS_THRESHOLD: usize = 1000;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;

/// Number of most common values shown by the frequency report
pub const DEFAULT_TOP_VALUES: usize = 10;

/// Constrained weighted drawing generation with bounded retries
pub mod generator;
/// Pool-slot membership tracking for uniqueness checks
pub mod numberset;
/// Frequency-weighted sampling and random source construction
pub mod sampling;

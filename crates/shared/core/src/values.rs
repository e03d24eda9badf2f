/// Price value - integer currency units
/// Future: could become a newtype with validation (non-negative, tick size)
pub type Price = i64;

/// Simulated session time in seconds, measured from session start
pub type Seconds = f64;

/// Time-varying price offset: a pure function from elapsed seconds to a
/// signed adjustment added to schedule prices
pub type OffsetFn = fn(Seconds) -> Price;

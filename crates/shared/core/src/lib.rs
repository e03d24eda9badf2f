//! Agora Core Domain
//!
//! Pure domain types for the Agora market experiment harness.
//! This crate contains no I/O, no randomness, and is 100% unit testable.

pub mod error;
pub mod schedule;
pub mod traders;
pub mod values;

// Re-export commonly used types at crate root
pub use error::{ScheduleError, TraderConfigError};
pub use schedule::{OrderSchedule, PriceRange, ScheduleSegment, StepMode, TimeMode};
pub use traders::{StrategyParams, TraderGroup, TraderSpec};
pub use values::{OffsetFn, Price, Seconds};

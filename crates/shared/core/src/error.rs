use thiserror::Error;

use crate::values::Seconds;

/// Domain-level errors for schedule construction and validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("Schedule segment must hold at least one price range")]
    EmptySegment,

    #[error("Segment time bounds are inverted: from {from} > to {to}")]
    InvertedBounds { from: Seconds, to: Seconds },

    #[error("Segments are not contiguous: one ends at {end}, the next starts at {start}")]
    Discontinuity { end: Seconds, start: Seconds },
}

/// Domain-level errors for trader configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraderConfigError {
    #[error("Ensemble size must be at least 2, got {0}")]
    EnsembleTooSmall(u32),

    #[error("Trader group must hold at least one trader")]
    EmptyGroup,
}

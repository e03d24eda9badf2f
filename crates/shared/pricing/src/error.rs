use thiserror::Error;

/// Domain-level errors for order price generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Participant count must be at least 2, got {0}")]
    InvalidParticipantCount(u32),

    #[error("Price range list is empty")]
    EmptyRanges,
}

pub type PricingResult<T> = std::result::Result<T, PricingError>;
